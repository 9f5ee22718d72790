#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::app_system::ShippingSystem;
    use crate::clients::ShippingClient;
    use crate::config_store::{parse_toml, ConfigError, ConfigSnapshot, StaticSource, TomlFileSource};
    use crate::domain::{
        Dimensions, ShippingClass, ShippingConfig, ShippingRate, ShippingRequest, ShippingSettings,
        ShippingZone,
    };
    use crate::mock_framework::{create_mock_config_store, expect_snapshot};
    use crate::resolver::ShippingError;

    const SAMPLE: &str = include_str!("../config/shipping.toml");

    fn sample() -> ShippingConfig {
        parse_toml(SAMPLE).unwrap()
    }

    fn single_rate_config(base_rate_cents: u64) -> ShippingConfig {
        ShippingConfig::new(
            ShippingSettings::default(),
            vec![ShippingZone::new(1, "continente", "Portugal Continental", 1000, 8999)],
            vec![ShippingClass::new(1, "standard", "Encomenda", "CTT", 30_000)],
            vec![ShippingRate::new(1, 1, 1, 0, 30_000, base_rate_cents)],
        )
    }

    #[tokio::test]
    async fn test_quote_uses_snapshot_from_store() {
        let (store, mut store_rx) = create_mock_config_store(10);
        let client = ShippingClient::new(store);

        let quote_task = tokio::spawn(async move {
            client
                .quote(ShippingRequest::new(2500, 1100, 4000).with_dimensions(Dimensions::new(30, 20, 10)))
                .await
        });

        let responder = expect_snapshot(&mut store_rx).await.expect("Expected Snapshot request");
        let snapshot = ConfigSnapshot::new(sample(), 4).unwrap();
        responder.send(Ok(Arc::new(snapshot))).unwrap();

        let quote = quote_task.await.unwrap().unwrap();
        assert_eq!(quote.zone_code, "continente");
        assert_eq!(quote.class_code, "standard");
        assert_eq!(quote.carrier_name, "CTT Expresso");
        assert_eq!(quote.volumetric_weight_grams, Some(1500));
        assert_eq!(quote.billable_weight_grams, 2500);
        assert_eq!(quote.cost.cost_cents, 550);
        assert_eq!(quote.amount_to_free_shipping_cents, 11_000);
        assert_eq!(quote.config_version, 4);
    }

    #[tokio::test]
    async fn test_quote_fails_cleanly_when_store_is_gone() {
        let (store, store_rx) = create_mock_config_store(10);
        drop(store_rx);
        let client = ShippingClient::new(store);

        let result = client.quote(ShippingRequest::new(1000, 1100, 0)).await;

        assert!(matches!(result, Err(ShippingError::ConfigUnavailable(_))));
    }

    #[tokio::test]
    async fn test_quote_fails_cleanly_when_reply_is_dropped() {
        let (store, mut store_rx) = create_mock_config_store(10);
        let client = ShippingClient::new(store);

        let quote_task = tokio::spawn(async move { client.quote(ShippingRequest::new(1000, 1100, 0)).await });

        let responder = expect_snapshot(&mut store_rx).await.expect("Expected Snapshot request");
        drop(responder);

        let result = quote_task.await.unwrap();
        assert!(matches!(result, Err(ShippingError::ConfigUnavailable(_))));
    }

    #[tokio::test]
    async fn test_batch_is_priced_against_one_snapshot() {
        let (store, mut store_rx) = create_mock_config_store(10);
        let client = ShippingClient::new(store);

        let batch_task = tokio::spawn(async move {
            let requests = vec![
                ShippingRequest::new(1000, 1100, 0),
                ShippingRequest::new(1000, 9100, 0),
                ShippingRequest::new(1000, 500, 0),
            ];
            client.quote_batch(&requests).await
        });

        let responder = expect_snapshot(&mut store_rx).await.expect("Expected Snapshot request");
        responder.send(Ok(Arc::new(ConfigSnapshot::new(sample(), 9).unwrap()))).unwrap();

        let results = batch_task.await.unwrap().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().config_version, 9);
        assert_eq!(results[1].as_ref().unwrap().zone_code, "madeira");
        assert_eq!(results[2], Err(ShippingError::ZoneNotFound { postal_code: 500 }));

        // Only one snapshot request was made for the whole batch.
        assert!(store_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_full_system_quotes_sample_matrix() {
        let system = ShippingSystem::new(StaticSource::new(sample())).unwrap();

        let envelope = system.shipping_client.quote(ShippingRequest::new(800, 4000, 2000)).await.unwrap();
        assert_eq!(envelope.class_code, "envelope");
        assert_eq!(envelope.cost.cost_cents, 350);

        let heavy = system.shipping_client.quote(ShippingRequest::new(7200, 4000, 2000)).await.unwrap();
        assert_eq!(heavy.class_code, "standard");
        // 750 + ceil(2199 / 1000) * 60
        assert_eq!(heavy.cost.cost_cents, 930);

        let free = system.shipping_client.quote(ShippingRequest::new(7200, 4000, 15_000)).await.unwrap();
        assert!(free.cost.free_shipping);
        assert_eq!(free.cost.cost_cents, 0);
        assert_eq!(
            (free.cost.estimated_days_min, free.cost.estimated_days_max),
            (heavy.cost.estimated_days_min, heavy.cost.estimated_days_max)
        );

        let pallet = system
            .shipping_client
            .quote_postal_code("4000-123", 2000, Some(Dimensions::new(50, 50, 50)), 0)
            .await
            .unwrap();
        assert_eq!(pallet.billable_weight_grams, 31_250);
        assert_eq!(pallet.class_code, "palete");

        let islands_heavy = system.shipping_client.quote(ShippingRequest::new(40_000, 9100, 0)).await;
        assert!(matches!(islands_heavy, Err(ShippingError::NoRateForWeight { .. })));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_publish_swaps_snapshot_without_touching_readers() {
        let system = ShippingSystem::new(StaticSource::new(single_rate_config(500))).unwrap();
        let request = ShippingRequest::new(1000, 1100, 0);

        let held = system.config_store.snapshot().await.unwrap();
        assert_eq!(held.version(), 1);

        let version = system.config_store.publish(single_rate_config(900)).await.unwrap();
        assert_eq!(version, 2);

        // A reader holding the old snapshot still prices on it.
        assert_eq!(crate::resolver::quote(&request, &held).unwrap().cost.cost_cents, 500);

        let quote = system.shipping_client.quote(request).await.unwrap();
        assert_eq!(quote.cost.cost_cents, 900);
        assert_eq!(quote.config_version, 2);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_rejected_publish_keeps_current_snapshot() {
        let system = ShippingSystem::new(StaticSource::new(single_rate_config(500))).unwrap();

        let mut broken = single_rate_config(900);
        broken.zones.push(ShippingZone::new(1, "ilhas", "Ilhas", 9000, 9999));

        let result = system.config_store.publish(broken).await;
        assert_eq!(result, Err(ConfigError::DuplicateId { kind: "zone", id: 1 }));

        let current = system.config_store.snapshot().await.unwrap();
        assert_eq!(current.version(), 1);
        assert_eq!(current.rates()[0].base_rate_cents, 500);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_settings_update_changes_volumetric_weight() {
        let system = ShippingSystem::new(StaticSource::new(single_rate_config(500))).unwrap();
        let request = ShippingRequest::new(1000, 1100, 0).with_dimensions(Dimensions::new(60, 40, 40));

        let before = system.shipping_client.quote(request.clone()).await.unwrap();
        assert_eq!(before.billable_weight_grams, 24_000);

        let version = system.config_store.update_settings(ShippingSettings::new(5000)).await.unwrap();
        assert_eq!(version, 2);

        let after = system.shipping_client.quote(request).await.unwrap();
        assert_eq!(after.billable_weight_grams, 19_200);
        assert_eq!(after.config_version, 2);

        let rejected = system.config_store.update_settings(ShippingSettings::new(0)).await;
        assert!(matches!(rejected, Err(ConfigError::InvalidSettings(_))));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_reload_rereads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shipping.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let system = ShippingSystem::new(TomlFileSource::new(&path)).unwrap();
        let request = ShippingRequest::new(800, 4000, 0);
        assert_eq!(system.shipping_client.quote(request.clone()).await.unwrap().cost.cost_cents, 350);

        std::fs::write(&path, SAMPLE.replace("base_rate_cents = 350", "base_rate_cents = 395")).unwrap();
        let version = system.config_store.reload().await.unwrap();
        assert_eq!(version, 2);
        assert_eq!(system.shipping_client.quote(request.clone()).await.unwrap().cost.cost_cents, 395);

        std::fs::write(&path, "not = [valid").unwrap();
        assert!(matches!(system.config_store.reload().await, Err(ConfigError::Parse(_))));
        let kept = system.shipping_client.quote(request).await.unwrap();
        assert_eq!(kept.cost.cost_cents, 395);
        assert_eq!(kept.config_version, 2);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_quotes_during_publish() {
        let system = ShippingSystem::new(StaticSource::new(single_rate_config(500))).unwrap();

        let mut tasks = Vec::new();
        for i in 0..32u32 {
            let client = system.shipping_client.clone();
            tasks.push(tokio::spawn(async move {
                client.quote(ShippingRequest::new(1000 + i, 1100, 0)).await
            }));
        }
        system.config_store.publish(single_rate_config(900)).await.unwrap();

        for task in tasks {
            let quote = task.await.unwrap().unwrap();
            // Each quote sees one whole snapshot, old or new.
            match quote.config_version {
                1 => assert_eq!(quote.cost.cost_cents, 500),
                2 => assert_eq!(quote.cost.cost_cents, 900),
                other => panic!("unexpected version {other}"),
            }
        }

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_startup_fails_on_invalid_source() {
        let mut config = single_rate_config(500);
        config.settings = ShippingSettings::new(0);

        let result = ShippingSystem::new(StaticSource::new(config));
        assert!(result.is_err());
    }
}
