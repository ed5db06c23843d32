use serde::{Deserialize, Serialize};

use crate::contract::{CoreRequest, CoreResponse};
use crate::core_service::{CoreService, ServiceError};
use crate::debounce::Clock;
use crate::navigation::Navigator;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidJson,
    Catalog,
    Config,
    Navigation,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransportResponse {
    Ok { response: CoreResponse },
    Err { error: ErrorResponse },
}

const INTERNAL_ERROR_JSON: &str =
    r#"{"status":"err","error":{"code":"internal","message":"response encoding failed"}}"#;

pub fn handle_request<C: Clock, N: Navigator>(
    service: &mut CoreService<C, N>,
    request: CoreRequest,
) -> TransportResponse {
    match service.handle_command(request) {
        Ok(response) => TransportResponse::Ok { response },
        Err(error) => TransportResponse::Err {
            error: map_service_error(error),
        },
    }
}

pub fn handle_json<C: Clock, N: Navigator>(service: &mut CoreService<C, N>, payload: &str) -> String {
    let response = match serde_json::from_str::<CoreRequest>(payload) {
        Ok(request) => handle_request(service, request),
        Err(error) => TransportResponse::Err {
            error: ErrorResponse {
                code: ErrorCode::InvalidJson,
                message: error.to_string(),
            },
        },
    };

    encode_response(&response)
}

pub fn encode_response(response: &TransportResponse) -> String {
    serde_json::to_string(response).unwrap_or_else(|error| {
        let fallback = TransportResponse::Err {
            error: ErrorResponse {
                code: ErrorCode::Internal,
                message: error.to_string(),
            },
        };
        serde_json::to_string(&fallback).unwrap_or_else(|_| INTERNAL_ERROR_JSON.to_string())
    })
}

fn map_service_error(error: ServiceError) -> ErrorResponse {
    match error {
        ServiceError::Config(message) => ErrorResponse {
            code: ErrorCode::Config,
            message,
        },
        ServiceError::Catalog(error) => ErrorResponse {
            code: ErrorCode::Catalog,
            message: error.to_string(),
        },
        ServiceError::Navigation(error) => ErrorResponse {
            code: ErrorCode::Navigation,
            message: error.to_string(),
        },
    }
}
