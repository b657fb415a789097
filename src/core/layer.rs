//! Module layer file reader.
//!
//! Layer files are XML trees of `folder`/`file`/`attr` elements. Any
//! element carrying a `bundlevalue="org.example.Bundle#KEY"` attribute
//! references a catalog key; the reference's origin is the path of `name`
//! attributes leading to it.

use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::core::{CatalogReference, parsers::read_text};

const NAME_ATTRIBUTE: &[u8] = b"name";
const BUNDLE_VALUE_ATTRIBUTE: &str = "bundlevalue";

pub fn load_layer(path: &Path) -> Result<Vec<CatalogReference>> {
    let content = read_text(path)?;
    parse_layer(&content).with_context(|| format!("Failed to parse layer: {}", path.display()))
}

/// Collect every catalog reference of a layer document, in document order.
pub fn parse_layer(xml: &str) -> Result<Vec<CatalogReference>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut names: Vec<String> = Vec::new();
    let mut references = Vec::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .with_context(|| format!("Malformed XML at byte {}", reader.buffer_position()))?;
        match event {
            Event::Start(e) => {
                let name = read_element(&e, &names, &mut references)?;
                names.push(name);
            }
            Event::Empty(e) => {
                read_element(&e, &names, &mut references)?;
            }
            Event::End(_) => {
                names.pop();
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(references)
}

/// Record the element's reference, if any, and return its `name` attribute.
fn read_element(
    element: &BytesStart<'_>,
    parents: &[String],
    references: &mut Vec<CatalogReference>,
) -> Result<String> {
    let mut name = String::new();
    let mut bundle_value = None;

    for attr in element.attributes() {
        let attr = attr.context("Malformed XML attribute")?;
        let key = attr.key.as_ref();
        if key == NAME_ATTRIBUTE {
            name = attr.unescape_value()?.into_owned();
        } else if key == BUNDLE_VALUE_ATTRIBUTE.as_bytes() {
            bundle_value = Some(attr.unescape_value()?.into_owned());
        }
    }

    if let Some(value) = bundle_value
        && let Some((sub_path, key)) = split_bundle_value(&value)
    {
        let origin = parents
            .iter()
            .map(String::as_str)
            .chain([name.as_str(), BUNDLE_VALUE_ATTRIBUTE])
            .filter(|segment| !segment.is_empty())
            .fold(String::new(), |mut origin, segment| {
                origin.push('/');
                origin.push_str(segment);
                origin
            });
        references.push(CatalogReference {
            sub_path,
            key,
            origin,
        });
    }

    Ok(name)
}

/// `org.example.Bundle#KEY` → (`org/example`, `KEY`).
fn split_bundle_value(value: &str) -> Option<(String, String)> {
    let (bundle, key) = value.split_once('#')?;
    let bundle = bundle.replace('.', "/");
    let package = match bundle.rfind('/') {
        Some(idx) => bundle[..idx].to_string(),
        None => String::new(),
    };
    Some((package, key.to_string()))
}
