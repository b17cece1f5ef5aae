use crate::extractor::extract_description;

/// Watch page with a player response blob for the given video
fn page_with_player_response(video_id: &str, description: &str) -> String {
    format!(
        r#"<html><head>
        <script>var ytInitialPlayerResponse = {{"videoDetails":{{"videoId":"{}","shortDescription":"{}"}},"playabilityStatus":{{"status":"OK"}}}};</script>
        </head><body><div id="player"></div></body></html>"#,
        video_id, description
    )
}

#[test]
fn test_player_response_strategy() {
    let html = page_with_player_response("abc123", "A review of the best hiking gear of 2024");
    assert_eq!(
        extract_description(&html, "abc123"),
        Some("A review of the best hiking gear of 2024".to_string())
    );
}

#[test]
fn test_player_response_whitespace_normalized() {
    let html = page_with_player_response("abc123", "line one\\nline two\\n\\nline three");
    assert_eq!(
        extract_description(&html, "abc123"),
        Some("line one line two line three".to_string())
    );
}

#[test]
fn test_mismatched_video_id_rejected() {
    // The blob still describes the previous video; it must not be returned
    // for the requested one
    let html = page_with_player_response("abc123", "stale description of the old video");
    assert_eq!(extract_description(&html, "xyz789"), None);
}

#[test]
fn test_mismatched_blob_falls_through_to_dom() {
    let html = r#"<html><head>
        <script>var ytInitialPlayerResponse = {"videoDetails":{"videoId":"abc123","shortDescription":"stale text from the previous video"}};</script>
        </head><body>
        <div id="description-text">The rendered description of the current video</div>
        </body></html>"#;
    assert_eq!(
        extract_description(html, "xyz789"),
        Some("The rendered description of the current video".to_string())
    );
}

#[test]
fn test_malformed_blob_falls_through_to_dom() {
    let html = r#"<html><head>
        <script>var ytInitialPlayerResponse = {"videoDetails": this is not json};</script>
        </head><body>
        <div id="description-text">Fallback description from the rendered page</div>
        </body></html>"#;
    assert_eq!(
        extract_description(html, "abc123"),
        Some("Fallback description from the rendered page".to_string())
    );
}

#[test]
fn test_dom_selector_priority() {
    // Two eligible selectors match; the earlier one in priority order wins
    let html = r#"<html><body>
        <ytd-text-inline-expander><span id="plain-snippet-text">Primary selector description text</span></ytd-text-inline-expander>
        <div id="description-text">Legacy selector description text</div>
        </body></html>"#;
    assert_eq!(
        extract_description(html, "abc123"),
        Some("Primary selector description text".to_string())
    );
}

#[test]
fn test_dom_text_cleaned() {
    let html = r#"<html><body>
        <div id="description-text">
            Chapters  0:00 intro 12:34 review...   Show more
        </div>
        </body></html>"#;
    assert_eq!(
        extract_description(html, "abc123"),
        Some("Chapters intro review".to_string())
    );
}

#[test]
fn test_short_dom_text_skipped() {
    // First selector cleans down to a stub; the probe keeps moving and the
    // later selector supplies the description
    let html = r#"<html><body>
        <ytd-text-inline-expander><span id="plain-snippet-text">0:00 ...</span></ytd-text-inline-expander>
        <div id="description-text">A real description with enough text in it</div>
        </body></html>"#;
    assert_eq!(
        extract_description(html, "abc123"),
        Some("A real description with enough text in it".to_string())
    );
}

#[test]
fn test_nothing_found() {
    let html = "<html><body><div id=\"player\">just a player</div></body></html>";
    assert_eq!(extract_description(html, "abc123"), None);
}
