#![allow(missing_docs)]

pub(crate) mod fake_api;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use fake_api::{FakeFinanceApi, transaction};
pub(crate) use form::{assert_form_input, assert_hx_endpoint, assert_submit_button, must_get_form};
pub(crate) use html::{assert_valid_html, must_select_text, parse_html_fragment};
pub(crate) use http::{assert_content_type, assert_status_ok};
