use chrono::{DateTime, Local, Utc};
use console::style;
use tabled::{Table, Tabled, settings::{Style, Alignment}};

use crate::models::cart::ShoppingCart;
use crate::models::product::{Product, ProductKind};

#[derive(Tabled)]
struct ProductTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Details")]
    details: String,
}

pub fn format_product_table(products: &[Product]) -> String {
    if products.is_empty() {
        return String::new();
    }

    let rows: Vec<ProductTableRow> = products
        .iter()
        .map(|product| ProductTableRow {
            id: product.id().to_string(),
            name: if product.name().len() > 30 {
                format!("{}...", &product.name()[..27])
            } else {
                product.name().to_string()
            },
            kind: format_kind(&product.kind()),
            available: product.available_items().to_string(),
            price: format_price(product.price()),
            details: variant_summary(product),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left());

    table.to_string()
}

pub fn format_product_detail(product: &Product) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", style("ID").bold(), style(product.id()).cyan()));
    output.push_str(&format!("{}: {}\n", style("Name").bold(), style(product.name()).green()));
    output.push_str(&format!("{}: {}\n", style("Type").bold(), format_kind(&product.kind())));
    output.push_str(&format!("{}: {}\n", style("Available").bold(), product.available_items()));
    output.push_str(&format!("{}: {}\n", style("Price").bold(), style(format_price(product.price())).yellow()));

    match product {
        Product::Electronics { brand, warranty_months, .. } => {
            output.push_str(&format!("{}: {}\n", style("Brand").bold(), brand));
            output.push_str(&format!("{}: {} months\n", style("Warranty").bold(), warranty_months));
        }
        Product::Clothing { size, color, .. } => {
            output.push_str(&format!("{}: {}\n", style("Size").bold(), size));
            output.push_str(&format!("{}: {}\n", style("Color").bold(), color));
        }
    }

    output
}

pub fn format_cart(cart: &ShoppingCart) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", style("Shopping Cart").bold().cyan()));
    if cart.is_empty() {
        output.push_str("  (empty)\n");
    } else {
        for item in cart.items() {
            output.push_str(&format!(
                "  {} - {}\n",
                item.name(),
                format_price(item.price())
            ));
        }
    }
    output.push_str(&format!(
        "{}: {}\n",
        style("Total Cost").bold(),
        style(format_price(cart.total())).green()
    ));
    output.push_str(&format!(
        "{}\n",
        style(format!("Session started {}", format_date(&cart.started_at()))).dim()
    ));

    output
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

fn format_kind(kind: &ProductKind) -> String {
    match kind {
        ProductKind::Electronics => style("Electronics").cyan().to_string(),
        ProductKind::Clothing => style("Clothing").magenta().to_string(),
    }
}

fn variant_summary(product: &Product) -> String {
    match product {
        Product::Electronics { brand, warranty_months, .. } => {
            format!("{}, {} mo warranty", brand, warranty_months)
        }
        Product::Clothing { size, color, .. } => format!("{} / {}", size, color),
    }
}
