/// Stable key identifying one (path, method) pair of the document.
///
/// A declared `operationId` is used verbatim. Without one, the key is
/// synthesized from the path and method: separators are stripped, each
/// later path fragment is capitalized at the boundary, and the uppercase
/// method is appended, so `/pets` + `GET` becomes `petsGET` and
/// `/pets/{petId}` + `DELETE` becomes `petsPetIdDELETE`. The same inputs
/// always produce the same key.
pub(crate) fn operation_key(path: &str, method: &str, declared_id: Option<&str>) -> String {
    if let Some(id) = declared_id {
        if !id.is_empty() {
            return id.to_string();
        }
    }

    let mut key = String::with_capacity(path.len() + method.len());
    for fragment in path
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|fragment| !fragment.is_empty())
    {
        if key.is_empty() {
            key.push_str(fragment);
        } else {
            let mut chars = fragment.chars();
            if let Some(first) = chars.next() {
                key.extend(first.to_uppercase());
                key.push_str(chars.as_str());
            }
        }
    }
    key.push_str(method);
    key
}
