mod cli;

use clap::Parser;
use eyre::eyre;
use time::format_description::well_known::Rfc3339;

use finwatch_core::connector::{ChainConnector, EthereumConnector};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let connector = EthereumConnector::new(&args.node_url, args.api_key.as_deref())
        .map_err(|err| eyre!("could not configure connector: {err}"))?;

    match args.command {
        cli::Command::Status => {
            if connector.connect().await {
                println!("node at {} is reachable", args.node_url);
            } else {
                return Err(eyre!("node at {} is unreachable", args.node_url));
            }
        }
        cli::Command::Block => {
            let block = connector
                .get_latest_block()
                .await
                .map_err(|err| eyre!("could not fetch latest block: {err}"))?;
            let when = block
                .timestamp
                .format(&Rfc3339)
                .unwrap_or_else(|_| block.timestamp.to_string());

            println!("block     {}", block.number);
            println!("hash      {}", block.hash);
            println!("time      {when}");
            println!("txs       {}", block.transactions.len());
            for tx in &block.transactions {
                println!("  {tx}");
            }
        }
        cli::Command::Tx { hash } => {
            // The connector collapses "not found" and lookup failures
            // into the same absent result.
            let Some(tx) = connector.get_transaction(&hash).await else {
                return Err(eyre!("transaction {hash} is unknown or could not be retrieved"));
            };

            println!("hash      {}", tx.hash);
            println!("from      {}", tx.from);
            match &tx.to {
                Some(to) => println!("to        {to}"),
                None => println!("to        (contract creation)"),
            }
            println!("value     {} ETH", tx.value_eth);
            println!("gas       {}", tx.gas);
            println!("gas price {} gwei", tx.gas_price_gwei);
            println!("nonce     {}", tx.nonce);
        }
        cli::Command::Balance { address } => {
            let balance = connector.get_balance(&address).await;
            println!("address   {}", balance.address);
            println!("balance   {} ETH", balance.balance_eth);
            println!("          {} wei", balance.balance_wei);
        }
    }

    Ok(())
}
