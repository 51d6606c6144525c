use web_sys::window;

/// Text of an embedded `<script type="application/json" id=...>` block, if the
/// host page carries one.
pub fn read_embedded_json(script_id: &str) -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(script_id)?;
    el.text_content().filter(|s| !s.trim().is_empty())
}
