//! Tests for request object generation against the mock partner config.

mod helpers;

use helpers::{mock_identity_data, partner_module, text_param};
use openx_htb::{generate_return_parcels, Architecture, ConfigurationError, QueryValue};

#[test]
fn test_sra_returns_correctly_formatted_object() {
    let module = partner_module(Architecture::Sra);
    let parcels = generate_return_parcels(module.profile(), module.config(), None).unwrap();
    let request = module.generate_request_obj(&parcels).unwrap();

    assert!(!request.url.is_empty());
    assert!(!request.callback_id.is_empty());

    // Strict shape: exactly url, data and callbackId
    let json = serde_json::to_value(&request).unwrap();
    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 3);
    assert!(json["url"].is_string());
    assert!(json["data"].is_object());
    assert!(json["callbackId"].is_string());
}

#[test]
fn test_builds_essential_query_params() {
    let module = partner_module(Architecture::Sra);
    let parcels = generate_return_parcels(module.profile(), module.config(), None).unwrap();
    let request = module.generate_request_obj(&parcels).unwrap();

    assert_eq!(text_param(&request, "auid"), "54321,12345,654321");
    assert_eq!(text_param(&request, "aus"), "300x250|300x600,300x600,728x90");
    assert_eq!(text_param(&request, "bc"), "hb_ix");
    assert_eq!(request.param("be"), Some(&QueryValue::Number(1)));
    assert_eq!(text_param(&request, "gdpr"), "1");
    assert!(request.param("ttduuid").is_none());
}

#[test]
fn test_builds_ttduuid_when_identity_data_exists() {
    let module = partner_module(Architecture::Sra);
    let parcels = generate_return_parcels(
        module.profile(),
        module.config(),
        Some(mock_identity_data()),
    )
    .unwrap();
    let request = module.generate_request_obj(&parcels).unwrap();

    assert_eq!(text_param(&request, "auid"), "54321,12345,654321");
    assert_eq!(text_param(&request, "aus"), "300x250|300x600,300x600,728x90");
    assert_eq!(text_param(&request, "ttduuid"), "uid123");
}

#[test]
fn test_request_url_points_at_delivery_domain() {
    let module = partner_module(Architecture::Sra);
    let parcels = generate_return_parcels(module.profile(), module.config(), None).unwrap();
    let request = module.generate_request_obj(&parcels).unwrap();

    assert_eq!(request.url, "https://example-d.openx.net/w/1.0/arj");
    let full = request.to_url().unwrap();
    let pairs: Vec<(String, String)> = full.query_pairs().into_owned().collect();
    assert!(pairs.contains(&("bc".to_string(), "hb_ix".to_string())));
    assert!(pairs.contains(&("auid".to_string(), "54321,12345,654321".to_string())));
}

#[test]
fn test_broken_slot_fails_instead_of_underbidding() {
    let module = partner_module(Architecture::Sra);
    let mut parcels = generate_return_parcels(module.profile(), module.config(), None).unwrap();
    parcels[2].exchange_slot.sizes.clear();

    let err = module.generate_request_obj(&parcels).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::EmptySizes {
            host_slot: "htSlot3".to_string(),
            ad_unit_id: "654321".to_string(),
        }
    );
}
