use worker::{Request, Response, Result};

use crate::reply::{RelayReply, ReplyBody};

pub fn reply_to_response(reply: RelayReply) -> Result<Response> {
    let RelayReply {
        status,
        headers,
        body,
    } = reply;
    let mut resp = match body {
        ReplyBody::Empty => Response::empty()?,
        ReplyBody::Text(text) | ReplyBody::Json(text) => Response::ok(text)?,
    };
    // Response::ok sets its own Content-Type; ours replaces it.
    let _ = resp.headers_mut().delete("Content-Type");
    for (name, value) in &headers {
        resp.headers_mut().set(name, value)?;
    }
    Ok(resp.with_status(status))
}

pub fn get_origin(req: &Request) -> Option<String> {
    req.headers().get("Origin").ok().flatten()
}
