//! Find accessories in the Control Center settings file
use std::{
    env::var_os,
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use encoding_rs::UTF_8;
use roxmltree::{Document, Node, ParsingOptions};

use crate::{
    datatypes::{Accessory, AccessoryFields},
    error::{Error, Result},
    query::{AccessoryQuery, ACCESSORY_QUERY},
};

/// Per user application data directory. Only defined on Windows.
pub const APP_DATA_VAR: &str = "APPDATA";

/// Location of the settings file below the application data directory
pub const SETTINGS_PATH: [&str; 3] = ["Elgato", "ControlCenter", "settings.xml"];

/// Where discovery looks for the application data directory
pub trait Environment {
    fn app_data_dir(&self) -> Option<PathBuf>;
}

/// The environment of the current process
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn app_data_dir(&self) -> Option<PathBuf> {
        non_empty(var_os(APP_DATA_VAR)).map(PathBuf::from)
    }
}

fn non_empty(value: Option<OsString>) -> Option<OsString> {
    value.filter(|value| !value.is_empty())
}

/// Path of the settings file, if it exists
pub fn settings_path<E: Environment>(env: &E) -> Result<PathBuf> {
    let mut path = env.app_data_dir().ok_or(Error::NoAppData)?;
    path.extend(SETTINGS_PATH.iter());

    if path.is_file() {
        Ok(path)
    } else {
        Err(Error::NoSettings(path))
    }
}

/// Read the settings file, decoding UTF-8 or, when it starts with a byte
/// order mark, UTF-16.
pub fn read_settings<P: AsRef<Path>>(path: P) -> Result<Vec<Accessory>> {
    let bytes = fs::read(path)?;
    let (xml, encoding, had_errors) = UTF_8.decode(&bytes);
    if had_errors {
        return Err(Error::from(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("settings file is not valid {}", encoding.name()),
        )));
    }
    parse_settings(&xml)
}

/// Extract every complete accessory from the settings document
pub fn parse_settings(xml: &str) -> Result<Vec<Accessory>> {
    select_accessories(xml, ACCESSORY_QUERY)
}

fn select_accessories(xml: &str, query: &str) -> Result<Vec<Accessory>> {
    let query = AccessoryQuery::compile(query)?;
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;

    Ok(query
        .select(&doc)
        .into_iter()
        .filter_map(accessory)
        .collect())
}

fn accessory(node: Node) -> Option<Accessory> {
    let mut fields = AccessoryFields::new();
    let children = node
        .children()
        .filter(|child| child.is_element() && child.tag_name().namespace().is_none());
    for child in children {
        match child.tag_name().name() {
            "UserDefinedName" => fields.user_defined_name(&text_content(child)),
            "Name" => fields.name(&text_content(child)),
            "IpAddress" => fields.address(&text_content(child)),
            _ => {}
        }
    }
    fields.build()
}

fn text_content(node: Node) -> String {
    node.descendants()
        .filter(|node| node.is_text())
        .filter_map(|text| text.text())
        .collect()
}

pub fn try_discover_with<E: Environment>(env: &E) -> Result<Vec<Accessory>> {
    let path = settings_path(env)?;
    log::debug!("Reading accessories from {}", path.display());
    read_settings(&path)
}

/// Discover accessories, treating any failure as finding none
pub fn discover_with<E: Environment>(env: &E) -> Vec<Accessory> {
    collapse(try_discover_with(env))
}

fn collapse(result: Result<Vec<Accessory>>) -> Vec<Accessory> {
    match result {
        Ok(accessories) => {
            log::debug!("Found {} accessories", accessories.len());
            accessories
        }
        Err(err) => {
            if err.is_defect() {
                log::error!("{}", err);
            } else if err.is_absent() {
                log::debug!("{}", err);
            } else {
                log::warn!("{}", err);
            }
            vec![]
        }
    }
}

/// Discover the accessories Control Center knows about.
///
/// Never fails: a missing application data directory, a missing settings
/// file or an unreadable one all yield an empty list.
pub fn discover() -> Vec<Accessory> {
    discover_with(&SystemEnvironment)
}
