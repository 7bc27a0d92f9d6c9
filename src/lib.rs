use relay::{handle, RelayRequest};
use services::siteverify::SiteverifyClient;
use utils::{get_origin, reply_to_response};
use worker::*;

pub mod cors;
pub mod relay;
pub mod reply;
pub mod turnstile;
mod utils;
pub mod services {
    pub mod siteverify;
}

/// Set with `wrangler secret put TURNSTILE_SECRET`
fn get_secret(env: &Env) -> Option<String> {
    Some(env.secret("TURNSTILE_SECRET").ok()?.to_string())
}

#[event(fetch)]
async fn main(mut req: Request, env: Env, _ctx: Context) -> Result<Response> {
    let method = req.method();
    let origin = get_origin(&req);
    // Preflight and rejected methods never touch the body.
    let body = if method == Method::Post {
        req.text().await?
    } else {
        String::new()
    };
    console_log!(
        "{:?} from {} (allowed: {})",
        method,
        origin.as_deref().unwrap_or("<no origin>"),
        cors::is_allowed_origin(origin.as_deref().unwrap_or(""))
    );

    let relay_req = RelayRequest {
        method,
        origin,
        body,
    };
    let verifier = get_secret(&env).map(SiteverifyClient::new);
    let reply = match handle(&relay_req, verifier.as_ref()).await {
        Ok(reply) => reply,
        Err(e) => {
            console_error!("relay failed: {:#}", e);
            return Err(Error::RustError(format!("relay failed: {e:#}")));
        }
    };

    reply_to_response(reply)
}
