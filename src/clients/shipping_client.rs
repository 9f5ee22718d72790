use tracing::{debug, error, info, instrument, warn};

use crate::clients::ConfigStoreClient;
use crate::domain::{Dimensions, ShippingQuote, ShippingRequest};
use crate::resolver::{self, parse_postal_code, ShippingError};

/// Prices shipments against the store's current snapshot.
///
/// Each call fetches exactly one snapshot and runs the whole pipeline against
/// it in the caller's task; the store actor is never busy while a quote is
/// computed.
#[derive(Clone)]
pub struct ShippingClient {
    config_store: ConfigStoreClient,
}

impl ShippingClient {
    pub fn new(config_store: ConfigStoreClient) -> Self {
        Self { config_store }
    }

    #[instrument(
        skip(self, request),
        fields(
            postal_code = request.destination_postal_code,
            weight_grams = request.actual_weight_grams
        )
    )]
    pub async fn quote(&self, request: ShippingRequest) -> Result<ShippingQuote, ShippingError> {
        debug!("Processing quote request");

        let snapshot = self
            .config_store
            .snapshot()
            .await
            .map_err(|e| ShippingError::ConfigUnavailable(e.to_string()))?;

        let result = resolver::quote(&request, &snapshot);
        log_outcome(&result);
        result
    }

    /// Quotes from a raw postal code such as `"1234-567"`.
    #[instrument(skip(self, dimensions))]
    pub async fn quote_postal_code(
        &self,
        postal_code: &str,
        actual_weight_grams: u32,
        dimensions: Option<Dimensions>,
        order_subtotal_cents: u64,
    ) -> Result<ShippingQuote, ShippingError> {
        let destination = parse_postal_code(postal_code)?;
        let request = ShippingRequest {
            actual_weight_grams,
            dimensions_cm: dimensions,
            destination_postal_code: destination,
            order_subtotal_cents,
        };
        self.quote(request).await
    }

    /// Quotes several shipments against one snapshot, so a config change
    /// halfway through cannot split the batch across versions.
    #[instrument(skip(self, requests), fields(count = requests.len()))]
    pub async fn quote_batch(
        &self,
        requests: &[ShippingRequest],
    ) -> Result<Vec<Result<ShippingQuote, ShippingError>>, ShippingError> {
        debug!("Processing batch quote request");

        let snapshot = self
            .config_store
            .snapshot()
            .await
            .map_err(|e| ShippingError::ConfigUnavailable(e.to_string()))?;

        Ok(requests
            .iter()
            .map(|request| {
                let result = resolver::quote(request, &snapshot);
                log_outcome(&result);
                result
            })
            .collect())
    }
}

fn log_outcome(result: &Result<ShippingQuote, ShippingError>) {
    match result {
        Ok(quote) => info!(
            zone_code = %quote.zone_code,
            class_code = %quote.class_code,
            cost_cents = quote.cost.cost_cents,
            free_shipping = quote.cost.free_shipping,
            "Shipment quoted"
        ),
        Err(e) if e.is_unavailable() => warn!(error = %e, "Shipping unavailable"),
        Err(e) => error!(error = %e, "Quote rejected"),
    }
}
