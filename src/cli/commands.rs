use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};

use tracing::{error, info};

use crate::{
    cli::args::*,
    models::{
        cart::ShoppingCart,
        product::{ProductDraft, ProductKind, VariantDraft},
        user::User,
    },
    services::{CatalogError, CatalogManager, DeleteOutcome},
    storage::{CatalogStore, JsonFileStore},
    utils::{
        config::Config,
        formatting::{format_cart, format_price, format_product_detail, format_product_table},
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static CART: Emoji<'_, '_> = Emoji("🛒 ", "");

pub struct CliApp {
    manager: CatalogManager,
    store: Box<dyn CatalogStore>,
}

impl CliApp {
    pub fn new(config: &Config, data_file: Option<String>) -> Result<Self> {
        let path = data_file.unwrap_or_else(|| config.data_file.clone());
        let store = Box::new(JsonFileStore::new(path));

        let mut manager = CatalogManager::new();
        manager
            .load_products(store.as_ref())
            .context("Failed to load catalog")?;

        Ok(Self { manager, store })
    }

    pub fn run(&mut self, args: Args) -> Result<()> {
        match args.command {
            Commands::Product { command } => self.handle_product_command(command),
            Commands::Manage => self.handle_manage(),
            Commands::Shop { demo } => self.handle_shop(demo),
        }
    }

    // Catalog management commands
    //
    // The one-shot subcommands persist after a mutation because the process
    // exits immediately; the interactive session leaves saving explicit.
    fn handle_product_command(&mut self, command: ProductCommands) -> Result<()> {
        match command {
            ProductCommands::Add { kind } => {
                if self.prompt_and_add_product(kind)? {
                    self.persist_catalog();
                }
                Ok(())
            }
            ProductCommands::Delete { id, force } => {
                if self.delete_with_confirm(&id, force)? {
                    self.persist_catalog();
                }
                Ok(())
            }
            ProductCommands::List => self.handle_list_products(),
            ProductCommands::Save => self.handle_save(),
        }
    }

    fn prompt_and_add_product(&mut self, kind: Option<ProductKindArg>) -> Result<bool> {
        println!("{} {}", CHECKMARK, style("Add Product").bold().cyan());

        let theme = ColorfulTheme::default();

        let kind = match kind {
            Some(ProductKindArg::Electronics) => ProductKind::Electronics,
            Some(ProductKindArg::Clothing) => ProductKind::Clothing,
            None => {
                let options = ["Electronics", "Clothing"];
                let selection = Select::with_theme(&theme)
                    .with_prompt("Product kind")
                    .items(&options)
                    .default(0)
                    .interact()?;
                match selection {
                    0 => ProductKind::Electronics,
                    _ => ProductKind::Clothing,
                }
            }
        };

        let id: String = Input::with_theme(&theme)
            .with_prompt("Product ID")
            .interact_text()?;

        let name: String = Input::with_theme(&theme)
            .with_prompt("Name")
            .interact_text()?;

        let available_items: u32 = Input::with_theme(&theme)
            .with_prompt("Available items")
            .interact_text()?;

        let price: f64 = Input::with_theme(&theme)
            .with_prompt("Price")
            .interact_text()?;

        let variant = match kind {
            ProductKind::Electronics => {
                let brand: String = Input::with_theme(&theme)
                    .with_prompt("Brand")
                    .interact_text()?;
                let warranty_months: u32 = Input::with_theme(&theme)
                    .with_prompt("Warranty (months)")
                    .interact_text()?;
                VariantDraft::Electronics {
                    brand,
                    warranty_months,
                }
            }
            ProductKind::Clothing => {
                let size: String = Input::with_theme(&theme)
                    .with_prompt("Size")
                    .interact_text()?;
                let color: String = Input::with_theme(&theme)
                    .with_prompt("Color")
                    .interact_text()?;
                VariantDraft::Clothing { size, color }
            }
        };

        let draft = ProductDraft {
            id,
            name,
            available_items,
            price,
            variant,
        };

        let product = match draft.build() {
            Ok(product) => product,
            Err(e) => {
                println!("{} Invalid product: {}", CROSS, style(&e).red());
                error!("Product draft rejected: {}", e);
                return Ok(false);
            }
        };

        match self.manager.add_product(product) {
            Ok(()) => {
                println!("{} Product added to the catalog!", CHECKMARK);
                Ok(true)
            }
            Err(CatalogError::DuplicateIdentifier { id }) => {
                println!(
                    "{} Product ID '{}' already exists",
                    CROSS,
                    style(id).red()
                );
                Ok(false)
            }
            Err(e) => {
                println!("{} Failed to add product: {}", CROSS, style(&e).red());
                error!("Failed to add product: {}", e);
                Ok(false)
            }
        }
    }

    fn delete_with_confirm(&mut self, id: &str, force: bool) -> Result<bool> {
        if !force {
            let theme = ColorfulTheme::default();
            let confirm = Confirm::with_theme(&theme)
                .with_prompt(format!("Delete product '{}' from the catalog?", id))
                .default(false)
                .interact()?;

            if !confirm {
                println!("Product deletion cancelled");
                return Ok(false);
            }
        }

        match self.manager.delete_product(id) {
            DeleteOutcome::Removed { product, remaining } => {
                println!(
                    "{} Deleted product: {}",
                    CHECKMARK,
                    style(product.name()).green()
                );
                println!("Total products remaining: {}", remaining);
                Ok(true)
            }
            DeleteOutcome::NotFound => {
                println!(
                    "{} Product not found with ID: {}",
                    WARNING,
                    style(id).yellow()
                );
                Ok(false)
            }
        }
    }

    fn handle_list_products(&self) -> Result<()> {
        let products = self.manager.list_products();

        if products.is_empty() {
            println!("{} The catalog is empty", INFO);
        } else {
            println!(
                "{} {}",
                INFO,
                style(format!("{} products in the catalog", products.len())).bold()
            );
            println!("{}", format_product_table(&products));
        }

        Ok(())
    }

    fn handle_save(&self) -> Result<()> {
        match self.manager.save_products(self.store.as_ref()) {
            Ok(()) => {
                println!("{} Catalog saved", CHECKMARK);
            }
            Err(e) => {
                println!("{} Failed to save catalog: {}", CROSS, style(&e).red());
                error!("Failed to save catalog: {}", e);
            }
        }

        Ok(())
    }

    fn persist_catalog(&self) {
        if let Err(e) = self.manager.save_products(self.store.as_ref()) {
            println!("{} Failed to save catalog: {}", CROSS, style(&e).red());
            error!("Failed to save catalog: {}", e);
        }
    }

    // Interactive management session
    fn handle_manage(&mut self) -> Result<()> {
        println!("{} {}", INFO, style("Catalog Management").bold().cyan());

        let theme = ColorfulTheme::default();
        let actions = [
            "Add product",
            "Delete product",
            "List products",
            "Save catalog",
            "Quit",
        ];

        loop {
            let selection = Select::with_theme(&theme)
                .with_prompt("Action")
                .items(&actions)
                .default(2)
                .interact()?;

            match selection {
                0 => {
                    self.prompt_and_add_product(None)?;
                }
                1 => {
                    let id: String = Input::with_theme(&theme)
                        .with_prompt("Product ID to delete")
                        .interact_text()?;
                    self.delete_with_confirm(&id, false)?;
                }
                2 => self.handle_list_products()?,
                3 => self.handle_save()?,
                _ => break,
            }
        }

        Ok(())
    }

    // Interactive shopping session
    fn handle_shop(&mut self, demo: bool) -> Result<()> {
        if demo {
            self.manager = CatalogManager::with_sample_products();
            info!("Shopping session started with the sample catalog");
        }

        println!("{} {}", CART, style("Online Shopping").bold().cyan());

        let theme = ColorfulTheme::default();

        let username: String = Input::with_theme(&theme)
            .with_prompt("Username")
            .interact_text()?;

        let password: String = Password::with_theme(&theme)
            .with_prompt("Password")
            .interact()?;

        // Credentials are recorded on the session; nothing verifies them
        let user = User::new(username, password);
        println!("Welcome, {}!", style(&user.username).green());
        info!("User {} started shopping session", user.username);

        let mut cart = ShoppingCart::new();
        info!("Cart session {} opened", cart.session_id());

        let actions = [
            "Browse catalog",
            "Add to cart",
            "Remove from cart",
            "View cart",
            "Quit",
        ];

        loop {
            let selection = Select::with_theme(&theme)
                .with_prompt(format!("Shopping ({} items in cart)", cart.len()))
                .items(&actions)
                .default(0)
                .interact()?;

            match selection {
                0 => self.handle_list_products()?,
                1 => self.handle_add_to_cart(&theme, &mut cart)?,
                2 => self.handle_remove_from_cart(&theme, &mut cart)?,
                3 => println!("{}", format_cart(&cart)),
                _ => break,
            }
        }

        if !cart.is_empty() {
            println!("{}", format_cart(&cart));
            println!(
                "{} Session over, cart of {} discarded",
                INFO,
                format_price(cart.total())
            );
        }
        info!("Cart session {} closed, cart discarded", cart.session_id());

        Ok(())
    }

    fn handle_add_to_cart(&self, theme: &ColorfulTheme, cart: &mut ShoppingCart) -> Result<()> {
        let products = self.manager.list_products();
        if products.is_empty() {
            println!("{} The catalog is empty", INFO);
            return Ok(());
        }

        let labels: Vec<String> = products.iter().map(|p| p.to_string()).collect();
        let selection = Select::with_theme(theme)
            .with_prompt("Add which product?")
            .items(&labels)
            .default(0)
            .interact()?;

        let product = products[selection].clone();
        println!("{}", format_product_detail(&product));
        cart.add(product);

        println!(
            "{} Added to cart ({} items, total {})",
            CHECKMARK,
            cart.len(),
            format_price(cart.total())
        );
        Ok(())
    }

    fn handle_remove_from_cart(
        &self,
        theme: &ColorfulTheme,
        cart: &mut ShoppingCart,
    ) -> Result<()> {
        if cart.is_empty() {
            println!("{} The cart is empty", INFO);
            return Ok(());
        }

        let labels: Vec<String> = cart.items().iter().map(|p| p.to_string()).collect();
        let selection = Select::with_theme(theme)
            .with_prompt("Remove which item?")
            .items(&labels)
            .default(0)
            .interact()?;

        let product = cart.items()[selection].clone();
        cart.remove(&product);

        info!("Removed {} from cart", product.id());
        println!(
            "{} Removed from cart ({} items, total {})",
            CHECKMARK,
            cart.len(),
            format_price(cart.total())
        );
        Ok(())
    }
}
