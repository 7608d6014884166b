//! Shared fixtures for sheet client tests


/// A representative gviz response body as returned by the endpoint:
/// JSON embedded inside a JavaScript callback wrapper.
pub const SAMPLE_DATA_BODY: &str = concat!(
    "/*O_o*/\ngoogle.visualization.Query.setResponse(",
    r#"{"version":"0.6","reqId":"0","status":"ok","sig":"1234","table":{"#,
    r#""cols":[{"id":"A","label":"Ubicación de picking","type":"string"},"#,
    r#"{"id":"E","label":"Artículo","type":"number"},"#,
    r#"{"id":"F","label":"Descripción","type":"string"}],"#,
    r#""rows":[{"c":[{"v":"P03-D12"},{"v":123.0,"f":"123"},{"v":"Café frío"}]},"#,
    r#"{"c":[{"v":"P01-I02"},{"v":456.0},null]}]}}"#,
    ");"
);

/// Metadata body with a formatted date in the single cell.
pub const SAMPLE_META_BODY: &str = concat!(
    "/*O_o*/\ngoogle.visualization.Query.setResponse(",
    r#"{"version":"0.6","status":"ok","table":{"cols":[{"id":"A","label":"","type":"date"}],"#,
    r#""rows":[{"c":[{"v":"Date(2024,0,15)","f":"15/01/2024"}]}]}}"#,
    ");"
);
