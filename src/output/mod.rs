pub mod json;
pub mod table;

use crate::interfaces::licence_information::LicenceCategory;
use crate::interfaces::occasion_bundles::Occasion;
use crate::interfaces::search_information::Location;
use anyhow::Result;
use json::JsonView;
use serde::Serialize;
use std::io::Write;
use table::Table;

/// How results are printed. Unknown names fall back to [`OutputFormat::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Default,
    Wide,
    Json,
    Yaml,
}

impl From<&str> for OutputFormat {
    fn from(name: &str) -> Self {
        match name {
            "wide" => Self::Wide,
            "json" => Self::Json,
            "yaml" => Self::Yaml,
            _ => Self::Default,
        }
    }
}

/// Something that has a fixed-column table view.
pub trait Tabular {
    fn to_table(&self) -> Table;
}

impl Tabular for [LicenceCategory] {
    /// One row per licence. CATEGORY is the licence's own category code,
    /// not the name of the group it's listed under.
    fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(["CATEGORY", "TYPE", "DESCRIPTION"]);
        for licence in self.iter().flat_map(|category| &category.licences) {
            table.add_row([&licence.category, &licence.name, &licence.description]);
        }
        table
    }
}

impl Tabular for [Location] {
    fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(["ID", "CITY", "STREET", "COORDINATES"]);
        for location in self {
            table.add_row([
                location.id.to_string(),
                location.address.city.clone(),
                location.address.street_address1.clone(),
                format!(
                    "{}, {}",
                    location.coordinates.latitude, location.coordinates.longitude
                ),
            ]);
        }
        table
    }
}

impl Tabular for [Occasion] {
    fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(["NAME", "TYPE", "DATE", "TIME", "COST"]);
        for occasion in self {
            table.add_row([
                occasion.location_name.clone(),
                occasion.name.clone(),
                occasion.date.clone(),
                occasion.time.clone(),
                format!("{}{}", occasion.cost, occasion.cost_text),
            ]);
        }
        table
    }
}

/// Write `items` to `out` in the requested format.
///
/// YAML uses the service's camelCase names, JSON the exported ones.
pub fn render<T>(items: &T, format: OutputFormat, out: &mut dyn Write) -> Result<()>
where
    T: Serialize + Tabular + JsonView + ?Sized,
{
    match format {
        OutputFormat::Json => {
            items.write_json(&mut *out)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, items)?,
        OutputFormat::Wide | OutputFormat::Default => writeln!(out, "{}", items.to_table())?,
    }

    Ok(())
}
