//! Utils

use clap::Parser;

/// Arguments for the storefront example
#[derive(Debug, Parser)]
pub struct ExampleStorefrontArgs {
    /// Configuration file to load (defaults apply when omitted)
    #[clap(short, long)]
    pub config: Option<String>,

    /// Override the checkout contact address
    #[clap(long)]
    pub contact: Option<String>,

    /// Product identifiers from the sample catalog to add to the cart
    #[clap(short, long, value_delimiter = ',', default_value = "mango,papaya,mango")]
    pub items: Vec<String>,
}
