//! Calls `accounts.getPolicies` against a local mock server with a logging hook and a typed
//! endpoint declaration.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use gigya_client::{
	auth::Credentials,
	client::ClientBuilder,
	endpoints::accounts::{GetPolicies, GetPoliciesRequest},
	hooks::Hooks,
	http::ReqwestTransport,
	reqwest::Client,
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let policies_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/accounts.getPolicies");
			then.status(200).header("content-type", "application/json").body(
				"{\"errorCode\":0,\"statusCode\":200,\"registration\":{\"requireCaptcha\":false},\"security\":{}}",
			);
		})
		.await;
	let hooks = Hooks::new()
		.on_before_request(|request| {
			println!("-> {}", request.method_name());

			Ok(request)
		})
		.on_after_response(|request, response| {
			println!("<- {} errorCode={}", request.method_name(), response.error_code);

			Ok(response)
		});
	let transport = ReqwestTransport::with_client(
		Client::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()?,
	);
	let client = ClientBuilder::new()
		.api_key("3_demo-api-key")
		.base_url(Url::parse(&server.url("/"))?)
		.credentials(Credentials::None)
		.hooks(hooks)
		.build_with_transport(transport)?;
	let response = client
		.send::<GetPolicies>(&GetPoliciesRequest::sections(["registration", "security"]))
		.await?;

	policies_mock.assert_calls_async(1).await;

	println!("registration: {:?}", response.payload.registration);
	println!("security: {:?}", response.payload.security);

	Ok(())
}
