use frame_summary_lambda::config::InvocationMode;
use frame_summary_lambda::handlers::summary::{
    handle_summary_event, invoke_locally, ApiGatewayResponse,
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_summary_event(event.payload, Some(&event.context)))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    match InvocationMode::from_env() {
        InvocationMode::LambdaRuntime => lambda_runtime::run(service_fn(handle_request)).await,
        InvocationMode::Local => {
            invoke_locally();
            Ok(())
        }
    }
}
