use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(about = concat!(
    env!("CARGO_CRATE_NAME"),
    " - minimalistic link-board posting client"
))]
pub struct Flags {
    /// GraphQL endpoint of the board API, overriding the config file
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Post as this user, overriding the config file
    #[arg(long)]
    pub user: Option<String>,
}

impl Flags {
    /// Parse from `std::env::args_os()`, exit on error.
    pub fn from_args() -> Self {
        Self::parse()
    }
}
