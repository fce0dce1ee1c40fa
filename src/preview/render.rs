use {
    gloo::net::http::Request,
    std::fmt,
};

/// Path of the server side renderer; it takes raw markdown in the request
/// body and answers with an html fragment.
pub const RENDER_PATH: &str = "/markdown";

/// Why a render round trip produced nothing to show. `Display` is the exact
/// text surfaced to the user.
#[derive(Debug)]
pub enum RenderFailure {
    /// The server answered with a non-2xx status; the payload is the response
    /// body, already human readable.
    Server(String),
    /// The request never produced a response.
    Network(gloo::net::Error),
}

impl fmt::Display for RenderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderFailure::Server(body) => return f.write_str(body),
            RenderFailure::Network(e) => return write!(f, "{}", e),
        }
    }
}

/// Send markdown source to the renderer and return the rendered fragment.
/// The body goes out as the browser sends a plain string; the content type is
/// whatever the client library attaches to that.
pub async fn post_markdown(source: String) -> Result<String, RenderFailure> {
    let response =
        Request::post(RENDER_PATH)
            .body(source)
            .map_err(RenderFailure::Network)?
            .send()
            .await
            .map_err(RenderFailure::Network)?;
    let body = response.text().await.map_err(RenderFailure::Network)?;
    if !response.ok() {
        return Err(RenderFailure::Server(body));
    }
    return Ok(body);
}
