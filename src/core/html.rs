// src/core/html.rs
//
// Substring-based HTML scanning, std-only. Every lookup is "first X in Y".
// Tag matching is case-insensitive and checks the name boundary, so
// searching "a" never lands on "<article>".

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

fn is_name_boundary(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b'>' || b == b'/'
}

/// Find the next `<tag ...>` open tag at or after `from`.
/// Returns (tag_start, one past the closing '>').
pub fn find_open_tag_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let pat = join!("<", &to_lower(tag));
    let mut at = from;
    loop {
        let rel = lc.get(at..)?.find(&pat)?;
        let start = at + rel;
        let after = start + pat.len();
        let ok = lc.as_bytes().get(after).is_some_and(|b| is_name_boundary(*b));
        if ok {
            let gt = s[start..].find('>')? + start + 1;
            return Some((start, gt));
        }
        at = after;
    }
}

/// Find the next full `<tag ...>...</tag>` element at or after `from`.
/// Returns (element_start, one past the closing tag). Does not handle
/// nested elements of the same tag.
pub fn next_element_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let (start, open_end) = find_open_tag_ci(s, tag, from)?;
    let close = join!("</", &to_lower(tag), ">");
    let lc = to_lower(s);
    let rel = lc.get(open_end..)?.find(&close)?;
    Some((start, open_end + rel + close.len()))
}

/// Inner markup of an element block (between the open tag and the last '<').
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Value of `name="..."` / `name='...'` / `name=bare` inside one open tag.
/// The attribute name must sit on a word boundary, so `srcset` does not
/// match `data-srcset`.
pub fn attr_ci(open_tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(open_tag);
    let pat = to_lower(name);
    let bytes = open_tag.as_bytes();
    let mut at = 0usize;
    loop {
        let rel = lc.get(at..)?.find(&pat)?;
        let i = at + rel;
        at = i + pat.len();

        if i == 0 || !bytes[i - 1].is_ascii_whitespace() {
            continue;
        }
        let mut j = i + pat.len();
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if bytes.get(j) != Some(&b'=') {
            continue;
        }
        j += 1;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        return match bytes.get(j) {
            Some(&q) if q == b'"' || q == b'\'' => {
                let vstart = j + 1;
                let vend = open_tag.get(vstart..)?.find(q as char)? + vstart;
                Some(open_tag[vstart..vend].to_string())
            }
            Some(_) => {
                let vstart = j;
                let mut vend = vstart;
                while vend < bytes.len() && !bytes[vend].is_ascii_whitespace() && bytes[vend] != b'>' {
                    vend += 1;
                }
                Some(open_tag[vstart..vend].trim_end_matches('/').to_string())
            }
            None => None,
        };
    }
}

/// Inner markup of the first heading element (`<h1>`–`<h6>`) in `s`.
pub fn first_heading_ci(s: &str) -> Option<String> {
    let mut best: Option<(usize, usize)> = None;
    for level in 1..=6u8 {
        let tag = format!("h{level}");
        if let Some((hs, he)) = next_element_ci(s, &tag, 0) {
            if best.is_none_or(|(bs, _)| hs < bs) {
                best = Some((hs, he));
            }
        }
    }
    best.map(|(hs, he)| inner_after_open_tag(&s[hs..he]))
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
