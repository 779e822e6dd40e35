pub(crate) mod health_check_controller;
pub(crate) mod sdk_signature_controller;
pub(crate) mod zoom_token_controller;
