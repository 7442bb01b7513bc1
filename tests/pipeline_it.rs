mod common;

// std
use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};
// crates.io
use parking_lot::Mutex;
// self
use common::*;
use gigya_client::{
	auth::Credentials,
	client::API_KEY_FIELD,
	error::{Error, TransportError},
	hooks::{HookResult, Hooks, Middleware},
	http::RawResponse,
	params::Params,
	request::{ApiRequest, Namespace},
	response::ApiResponse,
};
use serde_json::json;

#[tokio::test]
async fn last_before_hook_output_is_what_gets_sent() {
	let transport = RecordingTransport::replying(200, r#"{"errorCode":0}"#);
	let hooks = (1..=3).fold(Hooks::new(), |hooks, step| {
		hooks.on_before_request(move |mut request| {
			let trail = request.body.get("trail").unwrap_or_default().to_owned();

			request.body.append("trail", format!("{trail}{step}"));
			request.set_header("X-Step", step.to_string());

			Ok(request)
		})
	});
	let client = build_recording_client(transport.clone(), Credentials::None, hooks);

	client.accounts().call("getPolicies", Params::new()).await.expect("Call should succeed.");

	let sent = transport.sent();

	assert_eq!(sent[0].body.get("trail"), Some("123"));
	assert_eq!(sent[0].header("X-Step"), Some("3"));
}

#[tokio::test]
async fn after_hooks_see_the_request_that_was_sent() {
	let transport = RecordingTransport::replying(200, r#"{"errorCode":0,"count":1}"#);
	let hooks = Hooks::new()
		.on_before_request(|mut request| {
			request.body.append("injected", "yes");

			Ok(request)
		})
		.on_after_response(|request, mut response| {
			response.insert("echo", request.body.get("injected").unwrap_or("no"));

			Ok(response)
		})
		.on_after_response(|_, mut response| {
			let count = response.get("count").and_then(|v| v.as_i64()).unwrap_or_default();

			response.insert("count", count + 1);

			Ok(response)
		});
	let client = build_recording_client(transport, Credentials::None, hooks);
	let response =
		client.ds().call("search", Params::new()).await.expect("Call should succeed.");

	assert_eq!(response.get("echo"), Some(&json!("yes")));
	assert_eq!(response.get("count"), Some(&json!(2)));
}

#[tokio::test]
async fn failing_before_hook_skips_the_transport() {
	let transport = RecordingTransport::replying(200, r#"{"errorCode":0}"#);
	let hooks = Hooks::new().on_before_request(|_| Err("quota exhausted".into()));
	let client = build_recording_client(transport.clone(), Credentials::None, hooks);
	let err = client
		.accounts()
		.call("getPolicies", Params::new())
		.await
		.expect_err("Hook failure must abort the call.");

	assert!(matches!(&err, Error::Hook(inner) if inner.to_string() == "quota exhausted"));
	assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn failure_hook_error_replaces_the_status_error() {
	let transport = RecordingTransport::replying(500, "oops");
	let hooks = Hooks::new().on_failed_request(|_, raw| Err(format!("saw {}", raw.status).into()));
	let client = build_recording_client(transport, Credentials::None, hooks);
	let err = client
		.accounts()
		.call("getPolicies", Params::new())
		.await
		.expect_err("A 500 must reject the call.");

	assert!(matches!(&err, Error::Hook(inner) if inner.to_string() == "saw 500"));
}

#[tokio::test]
async fn non_zero_error_codes_still_run_after_hooks() {
	let transport = RecordingTransport::replying(
		200,
		r#"{"errorCode":400006,"errorMessage":"Invalid parameter value","statusCode":400}"#,
	);
	let after = Arc::new(AtomicUsize::new(0));
	let failed = Arc::new(AtomicUsize::new(0));
	let (after_counter, failed_counter) = (after.clone(), failed.clone());
	let hooks = Hooks::new()
		.on_after_response(move |_, response| {
			after_counter.fetch_add(1, Ordering::SeqCst);

			Ok(response)
		})
		.on_failed_request(move |_, _| {
			failed_counter.fetch_add(1, Ordering::SeqCst);

			Ok(())
		});
	let client = build_recording_client(transport, Credentials::None, hooks);
	let response = client
		.accounts()
		.call("setAccountInfo", Params::new().with("UID", "u-1"))
		.await
		.expect("Application errors are not call failures.");

	assert_eq!(response.error_code, 400006);
	assert!(!response.is_success());
	assert_eq!(after.load(Ordering::SeqCst), 1);
	assert_eq!(failed.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn json_bodies_without_error_code_are_returned() {
	let transport = RecordingTransport::replying(200, r#"{"statusCode":200,"UID":"u-1"}"#);
	let failed = Arc::new(AtomicUsize::new(0));
	let counter = failed.clone();
	let hooks = Hooks::new().on_failed_request(move |_, _| {
		counter.fetch_add(1, Ordering::SeqCst);

		Ok(())
	});
	let client = build_recording_client(transport, Credentials::None, hooks);
	let response = client
		.accounts()
		.call("getAccountInfo", Params::new())
		.await
		.expect("Parseable bodies must not fail the call.");

	assert_eq!(response.error_code, 0);
	assert_eq!(response.status_code, Some(200));
	assert_eq!(response.get("UID"), Some(&json!("u-1")));
	assert_eq!(failed.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn json_bodies_that_are_not_envelopes_fail_to_decode() {
	let transport = RecordingTransport::replying(200, "[1,2]");
	let failed = Arc::new(AtomicUsize::new(0));
	let counter = failed.clone();
	let hooks = Hooks::new().on_failed_request(move |_, _| {
		counter.fetch_add(1, Ordering::SeqCst);

		Ok(())
	});
	let client = build_recording_client(transport, Credentials::None, hooks);
	let err = client
		.ds()
		.call("get", Params::new())
		.await
		.expect_err("Arrays are not response envelopes.");

	assert!(matches!(err, Error::Decode { namespace: Namespace::Ds, .. }));
	assert!(!err.to_string().contains("could not be parsed"));
	assert_eq!(failed.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn network_failures_skip_failure_hooks() {
	let transport = RecordingTransport::unreachable("connection refused");
	let failed = Arc::new(AtomicUsize::new(0));
	let counter = failed.clone();
	let hooks = Hooks::new().on_failed_request(move |_, _| {
		counter.fetch_add(1, Ordering::SeqCst);

		Ok(())
	});
	let client = build_recording_client(transport.clone(), Credentials::None, hooks);
	let err = client
		.accounts()
		.call("getPolicies", Params::new())
		.await
		.expect_err("Unreachable servers must reject the call.");

	assert!(matches!(err, Error::Transport(TransportError::Io(_))));
	assert_eq!(transport.calls(), 1);
	assert_eq!(failed.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn middleware_observes_every_stage() {
	#[derive(Default)]
	struct Journal(Mutex<Vec<String>>);
	impl Middleware for Journal {
		fn on_before_request(&self, request: ApiRequest) -> HookResult<ApiRequest> {
			self.0.lock().push(format!("before {}", request.method_name()));

			Ok(request)
		}

		fn on_after_response(
			&self,
			request: &ApiRequest,
			response: ApiResponse,
		) -> HookResult<ApiResponse> {
			self.0.lock().push(format!("after {}", request.method_name()));

			Ok(response)
		}

		fn on_failed_request(&self, request: &ApiRequest, raw: &RawResponse) -> HookResult<()> {
			self.0.lock().push(format!("failed {} {}", request.method_name(), raw.status));

			Ok(())
		}
	}

	let transport = RecordingTransport::replying(200, r#"{"errorCode":0}"#);

	transport.push(502, "bad gateway");

	let journal = Arc::new(Journal::default());
	let hooks = Hooks::new().shared_middleware(journal.clone());
	let client = build_recording_client(transport, Credentials::None, hooks);

	client.audit().call("search", Params::new()).await.expect("First call should succeed.");
	client.audit().call("search", Params::new()).await.expect_err("Second call must fail.");

	assert_eq!(journal.0.lock().as_slice(), [
		"before audit.search",
		"after audit.search",
		"before audit.search",
		"failed audit.search 502",
	]);
}

#[tokio::test]
async fn parameters_keep_order_and_skip_absent_values() {
	let transport = RecordingTransport::replying(200, r#"{"errorCode":0}"#);
	let client = build_recording_client(
		transport.clone(),
		Credentials::key_secret("AKEY", "s3cret"),
		Hooks::new(),
	);
	let params = Params::new()
		.with("query", "select * from accounts")
		.with("limit", 10)
		.with("openCursor", true)
		.with("cursorId", serde_json::Value::Null)
		.with("profile", json!({ "firstName": "Ada" }));

	client.accounts().call("search", params).await.expect("Call should succeed.");

	let sent = transport.sent();

	assert_eq!(sent[0].body.iter().collect::<Vec<_>>(), [
		("query", "select * from accounts"),
		("limit", "10"),
		("openCursor", "true"),
		("profile", r#"{"firstName":"Ada"}"#),
		(API_KEY_FIELD, TEST_API_KEY),
		("userKey", "AKEY"),
		("secret", "s3cret"),
	]);
	assert!(sent[0].body.encode().starts_with("query=select+*+from+accounts&limit=10"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn cloned_clients_serve_concurrent_calls() {
	let transport = RecordingTransport::replying(200, r#"{"errorCode":0}"#);
	let client = build_recording_client(transport.clone(), Credentials::None, Hooks::new());
	let handles = (0..16)
		.map(|i| {
			let client = client.clone();

			tokio::spawn(async move {
				client.ds().call("get", Params::new().with("oid", format!("n-{i}"))).await
			})
		})
		.collect::<Vec<_>>();

	for handle in handles {
		handle.await.expect("Task should not panic.").expect("Call should succeed.");
	}

	let mut oids = transport
		.sent()
		.iter()
		.filter_map(|request| request.body.get("oid").map(str::to_owned))
		.collect::<Vec<_>>();

	oids.sort();
	oids.dedup();

	assert_eq!(oids.len(), 16);
}
