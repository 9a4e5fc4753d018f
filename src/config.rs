use clap::Parser;

use crate::remote::DeletePolicy;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Terminal product manager for a REST collection endpoint.
#[derive(Parser, Debug, Clone)]
#[command(name = "product-manager", about = "Manage products (name, price, stock) against a REST endpoint")]
pub struct Config {
    /// Collection URL every product request is issued against.
    #[arg(long, env = "PRODUCT_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// How DELETE responses are judged: `strict` requires a 2xx status,
    /// `lenient` accepts any response that arrives.
    #[arg(long, env = "PRODUCT_DELETE_POLICY", value_enum, default_value_t = DeletePolicy::Strict)]
    pub delete_policy: DeletePolicy,

    /// Capacity of the product manager's mailbox.
    #[arg(long, env = "PRODUCT_MAILBOX_SIZE", default_value_t = 32)]
    pub mailbox_size: usize,
}
