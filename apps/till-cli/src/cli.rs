use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "till", version, about = "Cash-register change calculator")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Config file (TOML); defaults to ./till.toml when present"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the change for a purchase and break it into bills and coins
    Change {
        #[arg(long, allow_hyphen_values = true, help = "Purchase total, e.g. 27,65")]
        total: String,
        #[arg(long, allow_hyphen_values = true, help = "Amount tendered, e.g. 55,00")]
        paid: String,
        #[arg(
            long = "stock",
            value_name = "ID=COUNT",
            value_parser = parse_stock,
            help = "Override the stock of one denomination (repeatable), e.g. stock_20=3"
        )]
        stock: Vec<(String, String)>,
    },
    /// List denominations with their identifiers and configured stock
    Denominations,
}

fn parse_stock(raw: &str) -> Result<(String, String), String> {
    let (id, count) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=COUNT, got `{raw}`"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing denomination id in `{raw}`"));
    }
    Ok((id.to_string(), count.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stock() {
        assert_eq!(
            parse_stock("stock_20=3").unwrap(),
            ("stock_20".to_string(), "3".to_string())
        );
        assert_eq!(
            parse_stock("stock_5=").unwrap(),
            ("stock_5".to_string(), String::new())
        );
        assert!(parse_stock("stock_5").is_err());
        assert!(parse_stock("=3").is_err());
    }

    #[test]
    fn test_change_args() {
        let cli = Cli::try_parse_from([
            "till", "--json", "change", "--total", "27,65", "--paid", "-5", "--stock", "stock_1=2",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Commands::Change { total, paid, stock } => {
                assert_eq!(total, "27,65");
                assert_eq!(paid, "-5");
                assert_eq!(stock, vec![("stock_1".to_string(), "2".to_string())]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
