use std::env;

use tracing::{error, info, Instrument};

use shipping_resolver::app_system::{setup_tracing, ShippingSystem};
use shipping_resolver::config_store::TomlFileSource;
use shipping_resolver::display::{format_cost_cents, format_estimated_days, format_weight, free_shipping_progress};
use shipping_resolver::domain::{Dimensions, ShippingQuote};

const DEFAULT_CONFIG_PATH: &str = "config/shipping.toml";

/// One shipment to price, as given on the command line.
struct QuoteArgs {
    postal_code: String,
    weight_grams: u32,
    subtotal_cents: u64,
    dimensions: Option<Dimensions>,
}

fn parse_dimensions(raw: &str) -> Result<Dimensions, String> {
    let sides = raw
        .split(['x', 'X'])
        .map(|side| side.trim().parse::<u32>().map_err(|e| format!("invalid dimension {side:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    match sides.as_slice() {
        [length, width, height] => Ok(Dimensions::new(*length, *width, *height)),
        _ => Err(format!("dimensions must be LxWxH, got {raw:?}")),
    }
}

fn parse_args(args: &[String]) -> Result<Vec<QuoteArgs>, String> {
    match args {
        [] => Ok(demo_requests()),
        [postal_code, weight, subtotal, rest @ ..] if rest.len() <= 1 => {
            let weight_grams = weight.parse().map_err(|e| format!("invalid weight {weight:?}: {e}"))?;
            let subtotal_cents = subtotal
                .parse()
                .map_err(|e| format!("invalid subtotal {subtotal:?}: {e}"))?;
            let dimensions = rest.first().map(|raw| parse_dimensions(raw)).transpose()?;

            Ok(vec![QuoteArgs {
                postal_code: postal_code.clone(),
                weight_grams,
                subtotal_cents,
                dimensions,
            }])
        }
        _ => Err("usage: shipping-quote <postal-code> <weight-g> <subtotal-cents> [LxWxH]".to_string()),
    }
}

fn demo_requests() -> Vec<QuoteArgs> {
    let demo = |postal_code: &str, weight_grams, subtotal_cents, dimensions| QuoteArgs {
        postal_code: postal_code.to_string(),
        weight_grams,
        subtotal_cents,
        dimensions,
    };

    vec![
        demo("1100-148", 800, 2_500, None),
        demo("4000-322", 2_500, 9_000, Some(Dimensions::new(30, 20, 10))),
        demo("4000-322", 2_000, 4_000, Some(Dimensions::new(50, 50, 50))),
        demo("3000", 7_200, 16_000, None),
        demo("9000-018", 1_200, 3_000, None),
        demo("9500-150", 45_000, 3_000, None),
    ]
}

fn log_quote(quote: &ShippingQuote, subtotal_cents: u64) {
    let cost = if quote.cost.free_shipping {
        "Grátis".to_string()
    } else {
        format_cost_cents(quote.cost.cost_cents)
    };

    info!(
        zone = %quote.zone_name,
        carrier = %quote.carrier_name,
        billable = %format_weight(quote.billable_weight_grams),
        cost = %cost,
        delivery = %format_estimated_days(quote.cost.estimated_days_min, quote.cost.estimated_days_max),
        free_shipping_progress = free_shipping_progress(subtotal_cents, quote.free_shipping_threshold_cents),
        missing = %format_cost_cents(quote.amount_to_free_shipping_cents),
        version = quote.config_version,
        "Quote"
    );
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let requests = parse_args(&args)?;

    let config_path = env::var("SHIPPING_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    info!(config_path = %config_path, "Starting shipping quote");

    let system = ShippingSystem::new(TomlFileSource::new(config_path)).map_err(|e| e.to_string())?;

    for request in requests {
        let span = tracing::info_span!("quote", postal_code = %request.postal_code);
        async {
            let result = system
                .shipping_client
                .quote_postal_code(
                    &request.postal_code,
                    request.weight_grams,
                    request.dimensions,
                    request.subtotal_cents,
                )
                .await;

            match result {
                Ok(quote) => log_quote(&quote, request.subtotal_cents),
                Err(e) => error!(error = %e, "Could not quote shipment"),
            }
        }
        .instrument(span)
        .await;
    }

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Done");
    Ok(())
}
