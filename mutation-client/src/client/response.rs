use crate::{
    transport::TransportResponse, ApplicationError, MutationDescriptor, MutationError,
    MutationPayload, MutationResult, Response, TransportError
};
use serde_json::{Map, Value};

/// Turn a raw response into the payload the descriptor selects, or classify why it can't be.
pub(crate) fn into_payload(
    descriptor: &MutationDescriptor,
    response: TransportResponse
) -> MutationResult {
    let parsed: Response = match serde_json::from_slice(&response.body) {
        Ok(parsed) => parsed,
        Err(_) if response.is_server_error() => {
            return Err(TransportError::Status(response.status).into())
        }
        Err(e) if response.is_success() => {
            return Err(MutationError::schema_mismatch(
                descriptor.name,
                format!("malformed response body: {}", e)
            ))
        }
        Err(_) => return Err(rejected(response).into())
    };

    // GraphQL errors outrank the status code.
    if let Some(errors) = parsed.errors.filter(|errors| !errors.is_empty()) {
        return Err(ApplicationError::GraphQL(errors).into());
    }
    if response.is_server_error() {
        return Err(TransportError::Status(response.status).into());
    }
    if !response.is_success() {
        return Err(rejected(response).into());
    }

    let root = match parsed.data {
        Some(Value::Object(mut data)) => data.remove(descriptor.root_field),
        Some(Value::Null) | None => {
            return Err(MutationError::schema_mismatch(
                descriptor.name,
                "response has no data"
            ))
        }
        Some(_) => {
            return Err(MutationError::schema_mismatch(
                descriptor.name,
                "response data is not an object"
            ))
        }
    };

    let mut root = match root {
        Some(Value::Object(root)) => root,
        Some(Value::Null) | None => {
            return Err(MutationError::schema_mismatch(
                descriptor.name,
                format!("`{}` is missing from the response", descriptor.root_field)
            ))
        }
        Some(_) => {
            return Err(MutationError::schema_mismatch(
                descriptor.name,
                format!("`{}` is not an object", descriptor.root_field)
            ))
        }
    };

    let missing: Vec<&str> = descriptor
        .selected_fields
        .iter()
        .copied()
        .filter(|field| !root.contains_key(*field))
        .collect();
    if !missing.is_empty() {
        return Err(MutationError::schema_mismatch(
            descriptor.name,
            format!("missing fields: {}", missing.join(", "))
        ));
    }

    let fields: Map<String, Value> = descriptor
        .selected_fields
        .iter()
        .filter_map(|field| root.remove_entry(*field))
        .collect();

    Ok(MutationPayload::new(fields))
}

fn rejected(response: TransportResponse) -> ApplicationError {
    ApplicationError::Status {
        status: response.status,
        body: String::from_utf8_lossy(&response.body).into_owned()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    static DELETE: MutationDescriptor = MutationDescriptor {
        name: "DeleteTodo",
        document: "mutation DeleteTodo($id: ID!) { deleteTodo(id: $id) { id title } }",
        root_field: "deleteTodo",
        variable_names: &["id"],
        selected_fields: &["id", "title"]
    };

    fn ok(body: Value) -> TransportResponse {
        TransportResponse::json(200, &body)
    }

    #[test]
    fn restricts_payload_to_selection() {
        let payload = into_payload(
            &DELETE,
            ok(json!({
                "data": { "deleteTodo": { "id": "1", "title": "x", "__typename": "Todo", "extra": 5 } }
            }))
        )
        .unwrap();

        assert_eq!(
            Value::from(payload),
            json!({ "id": "1", "title": "x" })
        );
    }

    #[test]
    fn null_field_counts_as_present() {
        let payload = into_payload(
            &DELETE,
            ok(json!({ "data": { "deleteTodo": { "id": "1", "title": null } } }))
        )
        .unwrap();

        assert_eq!(payload.get("title"), Some(&Value::Null));
    }

    #[test]
    fn missing_field_is_a_mismatch() {
        let err = into_payload(&DELETE, ok(json!({ "data": { "deleteTodo": { "id": "1" } } })))
            .unwrap_err();

        assert_eq!(
            err,
            MutationError::SchemaMismatch {
                operation: "DeleteTodo",
                reason: "missing fields: title".to_string()
            }
        );
    }

    #[test]
    fn missing_root_field_is_a_mismatch() {
        let err = into_payload(&DELETE, ok(json!({ "data": { "deleteTodo": null } }))).unwrap_err();
        assert!(matches!(err, MutationError::SchemaMismatch { .. }));

        let err = into_payload(&DELETE, ok(json!({ "data": null }))).unwrap_err();
        assert!(matches!(err, MutationError::SchemaMismatch { .. }));
    }

    #[test]
    fn malformed_body_is_a_mismatch() {
        let err = into_payload(&DELETE, TransportResponse::new(200, "<html>")).unwrap_err();
        assert!(matches!(err, MutationError::SchemaMismatch { .. }));
    }

    #[test]
    fn errors_array_is_an_application_error() {
        let err = into_payload(
            &DELETE,
            ok(json!({ "data": null, "errors": [{ "message": "Todo not found" }] }))
        )
        .unwrap_err();

        match err {
            MutationError::Application(ApplicationError::GraphQL(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].message, "Todo not found");
            }
            other => panic!("unexpected error {:?}", other)
        }
    }

    #[test]
    fn empty_errors_array_is_ignored() {
        let payload = into_payload(
            &DELETE,
            ok(json!({ "data": { "deleteTodo": { "id": "1", "title": "x" } }, "errors": [] }))
        );
        assert!(payload.is_ok());
    }

    #[test]
    fn client_errors_are_rejections() {
        let err = into_payload(&DELETE, TransportResponse::new(403, "forbidden")).unwrap_err();
        assert_eq!(
            err,
            MutationError::Application(ApplicationError::Status {
                status: 403,
                body: "forbidden".to_string()
            })
        );
    }

    #[test]
    fn server_errors_are_transient() {
        let err = into_payload(&DELETE, TransportResponse::new(502, "")).unwrap_err();
        assert_eq!(err, MutationError::Transport(TransportError::Status(502)));
        assert!(err.is_transient());

        let err = into_payload(&DELETE, TransportResponse::json(503, &json!({}))).unwrap_err();
        assert_eq!(err, MutationError::Transport(TransportError::Status(503)));
    }

    #[test]
    fn errors_array_on_server_error_is_an_application_error() {
        let err = into_payload(
            &DELETE,
            TransportResponse::json(
                500,
                &json!({ "data": null, "errors": [{ "message": "Todo not found" }] })
            )
        )
        .unwrap_err();

        assert!(matches!(
            err,
            MutationError::Application(ApplicationError::GraphQL(_))
        ));
        assert!(!err.is_transient());
    }
}
