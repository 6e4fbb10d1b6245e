use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;

#[derive(Parser)]
#[command(name = "shop-cli")]
#[command(about = "Product catalog manager with an interactive shopping cart")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog data file path (overrides SHOP_DATA_FILE)
    #[arg(short, long, global = true)]
    pub data_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Catalog management commands
    Product {
        #[command(subcommand)]
        command: ProductCommands,
    },
    /// Interactive catalog management session
    Manage,
    /// Interactive shopping session with a cart
    Shop {
        /// Start from the built-in sample catalog instead of the data file
        #[arg(long)]
        demo: bool,
    },
}

#[derive(Subcommand)]
pub enum ProductCommands {
    /// Add a new product to the catalog
    Add {
        /// Product kind (prompted for when omitted)
        #[arg(short, long)]
        kind: Option<ProductKindArg>,
    },
    /// Delete a product by ID
    Delete {
        /// Product ID
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// List the catalog sorted by product ID
    List,
    /// Persist the catalog through the configured store
    Save,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ProductKindArg {
    Electronics,
    Clothing,
}

impl fmt::Display for ProductKindArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductKindArg::Electronics => write!(f, "electronics"),
            ProductKindArg::Clothing => write!(f, "clothing"),
        }
    }
}
