//! One-off fee-market parameter calculator.
//!
//! Derives the parameters a fee market with elastic block sizes implies for
//! a given gas limit, elasticity multiplier, and base-fee change
//! denominator, and logs them. Unrelated to token module generation; kept
//! as a standalone binary.

use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;

#[derive(Parser, Debug)]
#[command(name = "fee-params")]
#[command(about = "Derive and log fee-market parameters")]
#[command(version)]
struct Args {
    /// Block gas limit
    #[arg(long, default_value_t = 30_000_000)]
    gas_limit: u64,

    /// Elasticity multiplier (gas limit over gas target)
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u64).range(1..))]
    elasticity: u64,

    /// Base-fee max change denominator
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u64).range(1..))]
    change_denominator: u64,

    /// Current base fee in wei
    #[arg(long, default_value_t = 1_000_000_000)]
    base_fee: u64,
}

#[derive(Debug, PartialEq)]
struct FeeParams {
    gas_target: u64,
    max_base_fee_delta: u64,
    next_base_fee_ceiling: u64,
    next_base_fee_floor: u64,
    blocks_to_double: u64,
}

fn derive_fee_params(gas_limit: u64, elasticity: u64, denominator: u64, base_fee: u64) -> FeeParams {
    let gas_target = gas_limit / elasticity;
    let max_base_fee_delta = base_fee / denominator;

    // Consecutive full blocks grow the base fee by 1/denominator each block
    let growth = 1.0 + 1.0 / denominator as f64;
    let blocks_to_double = (2f64.ln() / growth.ln()).ceil() as u64;

    FeeParams {
        gas_target,
        max_base_fee_delta,
        next_base_fee_ceiling: base_fee.saturating_add(max_base_fee_delta),
        next_base_fee_floor: base_fee.saturating_sub(max_base_fee_delta),
        blocks_to_double,
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let params = derive_fee_params(
        args.gas_limit,
        args.elasticity,
        args.change_denominator,
        args.base_fee,
    );

    info!("Gas limit: {}", args.gas_limit);
    info!("Gas target: {}", params.gas_target);
    info!("Current base fee: {} wei", args.base_fee);
    info!("Max base-fee change per block: {} wei", params.max_base_fee_delta);
    info!("Next-block base fee ceiling: {} wei", params.next_base_fee_ceiling);
    info!("Next-block base fee floor: {} wei", params.next_base_fee_floor);
    info!(
        "Consecutive full blocks to double the base fee: {}",
        params.blocks_to_double
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_defaults() {
        let params = derive_fee_params(30_000_000, 2, 8, 1_000_000_000);
        assert_eq!(params.gas_target, 15_000_000);
        assert_eq!(params.max_base_fee_delta, 125_000_000);
        assert_eq!(params.next_base_fee_ceiling, 1_125_000_000);
        assert_eq!(params.next_base_fee_floor, 875_000_000);
        // ln(2) / ln(1.125) = 5.88..., rounded up
        assert_eq!(params.blocks_to_double, 6);
    }

    #[test]
    fn test_floor_saturates_at_zero() {
        let params = derive_fee_params(30_000_000, 2, 8, 4);
        assert_eq!(params.max_base_fee_delta, 0);
        assert_eq!(params.next_base_fee_floor, 4);
    }

    #[test]
    fn test_ceiling_saturates_at_max() {
        let params = derive_fee_params(30_000_000, 2, 8, u64::MAX);
        assert_eq!(params.next_base_fee_ceiling, u64::MAX);
    }

    #[test]
    fn test_zero_divisors_rejected_at_parse_time() {
        assert!(Args::try_parse_from(["fee-params", "--elasticity", "0"]).is_err());
        assert!(Args::try_parse_from(["fee-params", "--change-denominator", "0"]).is_err());
        assert!(Args::try_parse_from(["fee-params", "--elasticity", "1"]).is_ok());
    }
}
