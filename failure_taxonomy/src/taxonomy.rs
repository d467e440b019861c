//! The failure categories and their default status codes.

define_failures! {
    contextual {
        NetworkConnection => "network-connection", network_connection,
            "The connection to the server could not be established or was lost.";
        Exception => "exception", exception,
            "An unexpected error was raised while performing the operation.";
    }
    status_coded {
        Unauthorized = 401 => "unauthorized", unauthorized,
            "The client must authenticate itself to get the requested response.";
        TooManyRequests = 429 => "too-many-requests", too_many_requests,
            "The user has sent too many requests in a given amount of time.";
        BadRequest = 400 => "bad-request", bad_request,
            "The server will not process the request because of a perceived client error.";
        PaymentRequired = 402 => "payment-required", payment_required,
            "Reserved for digital payment systems; rarely used.";
        Forbidden = 403 => "forbidden", forbidden,
            "The client is known to the server but has no access rights to the content.";
        NotFound = 404 => "not-found", not_found,
            "The server cannot find the requested resource.";
        MethodNotAllowed = 405 => "method-not-allowed", method_not_allowed,
            "The request method is known but not supported by the target resource.";
        NotAcceptable = 406 => "not-acceptable", not_acceptable,
            "No content conforms to the criteria given by the user agent.";
        ProxyAuthenticationRequired = 407 => "proxy-authentication-required", proxy_authentication_required,
            "Authentication is needed to be done by a proxy.";
        RequestTimeout = 408 => "request-timeout", request_timeout,
            "The server would like to shut down an idle connection.";
        Conflict = 409 => "conflict", conflict,
            "The request conflicts with the current state of the server.";
        Gone = 410 => "gone", gone,
            "The requested content has been permanently deleted from the server.";
        LengthRequired = 411 => "length-required", length_required,
            "The server requires a Content-Length header that was not sent.";
        PreconditionFailed = 412 => "precondition-failed", precondition_failed,
            "The server does not meet preconditions given in the request headers.";
        PayloadTooLarge = 413 => "payload-too-large", payload_too_large,
            "The request entity is larger than limits defined by the server.";
        UriTooLong = 414 => "uri-too-long", uri_too_long,
            "The requested URI is longer than the server is willing to interpret.";
        UnsupportedMediaType = 415 => "unsupported-media-type", unsupported_media_type,
            "The media format of the request is not supported by the server.";
        RangeNotSatisfiable = 416 => "range-not-satisfiable", range_not_satisfiable,
            "The range given in the Range header cannot be fulfilled.";
        ExpectationFailed = 417 => "expectation-failed", expectation_failed,
            "The expectation in the Expect header cannot be met by the server.";
        MisdirectedRequest = 421 => "misdirected-request", misdirected_request,
            "The request was directed at a server that cannot produce a response.";
        UnprocessableEntity = 422 => "unprocessable-entity", unprocessable_entity,
            "The request was well-formed but has semantic errors.";
        Locked = 423 => "locked", locked,
            "The resource being accessed is locked.";
        FailedDependency = 424 => "failed-dependency", failed_dependency,
            "The request failed because a previous request failed.";
        TooEarly = 425 => "too-early", too_early,
            "The server will not risk processing a request that might be replayed.";
        UpgradeRequired = 426 => "upgrade-required", upgrade_required,
            "The client must upgrade to a different protocol.";
        PreconditionRequired = 428 => "precondition-required", precondition_required,
            "The origin server requires the request to be conditional.";
        RequestHeaderFieldsTooLarge = 431 => "request-header-fields-too-large", request_header_fields_too_large,
            "The request header fields are too large.";
        UnavailableForLegalReasons = 451 => "unavailable-for-legal-reasons", unavailable_for_legal_reasons,
            "The resource cannot legally be provided.";
        CannotConnectToServer = 500 => "cannot-connect-to-server", cannot_connect_to_server,
            "The server has encountered a situation it does not know how to handle.";
        NotImplemented = 501 => "not-implemented", not_implemented,
            "The request method is not supported by the server.";
        BadGateway = 502 => "bad-gateway", bad_gateway,
            "A gateway got an invalid response from the upstream server.";
        ServiceUnavailable = 503 => "service-unavailable", service_unavailable,
            "The server is temporarily unable to handle the request.";
        GatewayTimeout = 504 => "gateway-timeout", gateway_timeout,
            "A gateway did not get a response from the upstream server in time.";
        HttpVersionNotSupported = 505 => "http-version-not-supported", http_version_not_supported,
            "The HTTP version used in the request is not supported.";
        VariantAlsoNegotiates = 506 => "variant-also-negotiates", variant_also_negotiates,
            "The chosen variant is itself configured for content negotiation.";
        InsufficientStorage = 507 => "insufficient-storage", insufficient_storage,
            "The server is unable to store the representation needed for the request.";
        LoopDetected = 508 => "loop-detected", loop_detected,
            "The server detected an infinite loop while processing the request.";
        NotExtended = 510 => "not-extended", not_extended,
            "Further extensions to the request are required.";
        NetworkAuthenticationRequired = 511 => "network-authentication-required", network_authentication_required,
            "The client needs to authenticate to gain network access.";
    }
}
