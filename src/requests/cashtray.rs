//! Cashtray endpoints.
//!
//! - GET /cashtrays/{cashtray_id} - Cashtray with the result of its last scan
//! - PATCH /cashtrays/{cashtray_id} - Change amount, description or lifetime
//! - DELETE /cashtrays/{cashtray_id} - Cancel (invalidate) a cashtray

use uuid::Uuid;

use crate::models::{Cashtray, CashtrayWithResult};

endpoint! {
    pub struct GetCashtray => CashtrayWithResult {
        name: "get_cashtray",
        builder: GetCashtrayBuilder,
        method: Get,
        path: "/cashtrays/{cashtray_id}",
        path_params: { cashtray_id: Uuid },
        required: {},
        optional: {},
    }
}

endpoint! {
    /// Update a cashtray that has not been scanned yet.
    ///
    /// `expires_in` is the new lifetime in seconds, counted from now.
    pub struct UpdateCashtray => Cashtray {
        name: "update_cashtray",
        builder: UpdateCashtrayBuilder,
        method: Patch,
        path: "/cashtrays/{cashtray_id}",
        path_params: { cashtray_id: Uuid },
        required: {},
        optional: {
            amount: f64,
            description: String,
            expires_in: u32,
        },
    }
}

endpoint! {
    pub struct CancelCashtray => Cashtray {
        name: "cancel_cashtray",
        builder: CancelCashtrayBuilder,
        method: Delete,
        path: "/cashtrays/{cashtray_id}",
        path_params: { cashtray_id: Uuid },
        required: {},
        optional: {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::{Method, Request};
    use serde_json::json;

    const CASHTRAY_ID: &str = "e3b0c442-98fc-4c14-9afb-f4c8996fb924";

    fn cashtray_id() -> Uuid {
        Uuid::parse_str(CASHTRAY_ID).unwrap()
    }

    #[test]
    fn every_cashtray_endpoint_requires_the_id() {
        assert_eq!(
            GetCashtray::builder().build().unwrap_err().missing_field(),
            Some("cashtray_id")
        );
        assert_eq!(
            UpdateCashtray::builder().amount(100.0).build().unwrap_err().missing_field(),
            Some("cashtray_id")
        );
        assert_eq!(
            CancelCashtray::builder().build().unwrap_err().missing_field(),
            Some("cashtray_id")
        );
    }

    #[test]
    fn the_three_endpoints_share_a_path_and_differ_by_method() {
        let get = GetCashtray::builder().cashtray_id(cashtray_id()).build().unwrap();
        let update = UpdateCashtray::builder().cashtray_id(cashtray_id()).build().unwrap();
        let cancel = CancelCashtray::builder().cashtray_id(cashtray_id()).build().unwrap();

        let expected = format!("/cashtrays/{CASHTRAY_ID}");
        assert_eq!(get.path(), expected);
        assert_eq!(update.path(), expected);
        assert_eq!(cancel.path(), expected);

        assert_eq!(GetCashtray::METHOD, Method::Get);
        assert_eq!(UpdateCashtray::METHOD, Method::Patch);
        assert_eq!(CancelCashtray::METHOD, Method::Delete);
    }

    #[test]
    fn update_cashtray_body_has_only_given_fields() {
        let request = UpdateCashtray::builder()
            .cashtray_id(cashtray_id())
            .amount(-500.0)
            .expires_in(600u32)
            .build()
            .unwrap();

        assert_eq!(
            json!(request.params().unwrap()),
            json!({ "amount": -500.0, "expires_in": 600 })
        );
    }

    #[test]
    fn cancel_cashtray_has_empty_body() {
        let request = CancelCashtray::builder().cashtray_id(cashtray_id()).build().unwrap();

        assert!(request.params().unwrap().is_empty());
    }
}
