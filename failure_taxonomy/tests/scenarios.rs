use failure_taxonomy::{Failure, FailureKind};
use serde_json::{json, Value};

#[test]
fn not_found_with_no_args() {
    let failure: Failure = Failure::not_found();
    assert_eq!(failure.kind(), FailureKind::NotFound);
    assert_eq!(failure.http_code(), Some(404));
    assert_eq!(failure.additional_data(), None);
}

#[test]
fn too_many_requests_with_code_and_context() {
    let failure = Failure::TooManyRequests {
        http_code: 429,
        additional_data: Some(json!({"retryAfter": 30})),
    };
    assert_eq!(failure.http_code(), Some(429));
    assert_eq!(failure.additional_data(), Some(&json!({"retryAfter": 30})));
}

#[test]
fn exception_carries_error_object_without_code() {
    let cause = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let failure = Failure::exception().with_additional_data(cause);
    assert_eq!(failure.http_code(), None);

    let data = failure.additional_data().unwrap();
    assert_eq!(data.kind(), std::io::ErrorKind::BrokenPipe);
    assert_eq!(data.to_string(), "pipe closed");
}

#[test]
fn service_unavailable_default_code() {
    let failure: Failure = Failure::service_unavailable();
    assert_eq!(failure.http_code(), Some(503));
}

#[test]
fn every_kind_defaults_to_its_table_code() {
    for kind in FailureKind::ALL {
        let failure: Failure = Failure::from_kind(*kind);
        assert_eq!(failure.kind(), *kind);
        assert_eq!(failure.http_code(), kind.default_http_code(), "{}", kind);
        assert_eq!(failure.additional_data(), None);
    }
}

#[test]
fn well_known_defaults() {
    let expected = [
        (FailureKind::Unauthorized, 401),
        (FailureKind::Forbidden, 403),
        (FailureKind::NotFound, 404),
        (FailureKind::Conflict, 409),
        (FailureKind::PayloadTooLarge, 413),
        (FailureKind::TooManyRequests, 429),
        (FailureKind::CannotConnectToServer, 500),
        (FailureKind::ServiceUnavailable, 503),
        (FailureKind::NetworkAuthenticationRequired, 511),
    ];
    for (kind, code) in expected {
        assert_eq!(kind.default_http_code(), Some(code), "{}", kind);
    }
}

#[test]
fn explicit_code_override_is_preserved() {
    for kind in FailureKind::ALL.iter().filter(|k| k.is_status_coded()) {
        let failure: Failure = Failure::from_parts(*kind, Some(499), None).unwrap();
        assert_eq!(failure.http_code(), Some(499), "{}", kind);
    }
    let failure: Failure<Value> = Failure::BadRequest {
        http_code: 499,
        additional_data: None,
    };
    assert_eq!(failure.http_code(), Some(499));
}

#[test]
fn context_round_trips_for_every_kind() {
    let payload = json!({"requestId": "abc-123", "attempts": [1, 2, 3]});
    for kind in FailureKind::ALL {
        let failure: Failure = Failure::from_kind(*kind).with_additional_data(payload.clone());
        assert_eq!(failure.additional_data(), Some(&payload));
        assert_eq!(failure.into_additional_data(), Some(payload.clone()));
    }
}

#[test]
fn equality_requires_same_variant_code_and_context() {
    let a: Failure = Failure::not_found().with_additional_data(json!("x"));
    let b: Failure = Failure::not_found().with_additional_data(json!("x"));
    assert_eq!(a, b);

    let other_context: Failure = Failure::not_found().with_additional_data(json!("y"));
    assert_ne!(a, other_context);

    let other_code: Failure = Failure::NotFound {
        http_code: 410,
        additional_data: Some(json!("x")),
    };
    assert_ne!(a, other_code);

    // Same code and context, different variant.
    let gone: Failure = Failure::Gone {
        http_code: 404,
        additional_data: Some(json!("x")),
    };
    assert_ne!(a, gone);
    assert_ne!(
        Failure::<Value>::network_connection(),
        Failure::<Value>::exception()
    );
}

#[test]
fn distinct_kinds_never_compare_equal() {
    for (i, left) in FailureKind::ALL.iter().enumerate() {
        for right in &FailureKind::ALL[i + 1..] {
            let l: Failure<()> = Failure::from_kind(*left);
            let r: Failure<()> = Failure::from_kind(*right);
            assert_ne!(l, r, "{} vs {}", left, right);
        }
    }
}

#[test]
fn generated_constructors_match_from_kind() {
    let constructed: Vec<(Failure<()>, FailureKind)> = vec![
        (Failure::network_connection(), FailureKind::NetworkConnection),
        (Failure::exception(), FailureKind::Exception),
        (Failure::unauthorized(), FailureKind::Unauthorized),
        (Failure::too_many_requests(), FailureKind::TooManyRequests),
        (Failure::bad_request(), FailureKind::BadRequest),
        (Failure::payment_required(), FailureKind::PaymentRequired),
        (Failure::forbidden(), FailureKind::Forbidden),
        (Failure::not_found(), FailureKind::NotFound),
        (Failure::method_not_allowed(), FailureKind::MethodNotAllowed),
        (Failure::not_acceptable(), FailureKind::NotAcceptable),
        (Failure::proxy_authentication_required(), FailureKind::ProxyAuthenticationRequired),
        (Failure::request_timeout(), FailureKind::RequestTimeout),
        (Failure::conflict(), FailureKind::Conflict),
        (Failure::gone(), FailureKind::Gone),
        (Failure::length_required(), FailureKind::LengthRequired),
        (Failure::precondition_failed(), FailureKind::PreconditionFailed),
        (Failure::payload_too_large(), FailureKind::PayloadTooLarge),
        (Failure::uri_too_long(), FailureKind::UriTooLong),
        (Failure::unsupported_media_type(), FailureKind::UnsupportedMediaType),
        (Failure::range_not_satisfiable(), FailureKind::RangeNotSatisfiable),
        (Failure::expectation_failed(), FailureKind::ExpectationFailed),
        (Failure::misdirected_request(), FailureKind::MisdirectedRequest),
        (Failure::unprocessable_entity(), FailureKind::UnprocessableEntity),
        (Failure::locked(), FailureKind::Locked),
        (Failure::failed_dependency(), FailureKind::FailedDependency),
        (Failure::too_early(), FailureKind::TooEarly),
        (Failure::upgrade_required(), FailureKind::UpgradeRequired),
        (Failure::precondition_required(), FailureKind::PreconditionRequired),
        (Failure::request_header_fields_too_large(), FailureKind::RequestHeaderFieldsTooLarge),
        (Failure::unavailable_for_legal_reasons(), FailureKind::UnavailableForLegalReasons),
        (Failure::cannot_connect_to_server(), FailureKind::CannotConnectToServer),
        (Failure::not_implemented(), FailureKind::NotImplemented),
        (Failure::bad_gateway(), FailureKind::BadGateway),
        (Failure::service_unavailable(), FailureKind::ServiceUnavailable),
        (Failure::gateway_timeout(), FailureKind::GatewayTimeout),
        (Failure::http_version_not_supported(), FailureKind::HttpVersionNotSupported),
        (Failure::variant_also_negotiates(), FailureKind::VariantAlsoNegotiates),
        (Failure::insufficient_storage(), FailureKind::InsufficientStorage),
        (Failure::loop_detected(), FailureKind::LoopDetected),
        (Failure::not_extended(), FailureKind::NotExtended),
        (Failure::network_authentication_required(), FailureKind::NetworkAuthenticationRequired),
    ];
    assert_eq!(constructed.len(), FailureKind::ALL.len());
    for (failure, kind) in constructed {
        assert_eq!(failure.kind(), kind);
        assert_eq!(failure.http_code(), kind.default_http_code(), "{}", kind);
        assert_eq!(failure.additional_data(), None);
        assert_eq!(failure, Failure::from_kind(kind), "{}", kind);
    }
}
