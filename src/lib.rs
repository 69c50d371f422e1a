//! bethyw_rs
//!
//! A small Rust library for importing Welsh Government statistics datasets,
//! merging them into one in-memory store keyed by local authority, and
//! rendering the result as text tables or JSON. Pairs with the `bethyw` CLI.
//!
//! ### Features
//! - Import authority name CSVs, StatsWales JSON exports, and year-per-column CSVs
//! - Restrict imports by authority code, measure codename, and year range
//! - Merge repeated imports: newer readings win, older ones are kept otherwise
//! - Per-measure average, difference, and percentage difference
//!
//! ### Example
//! ```no_run
//! use bethyw_rs::{AreaStore, Filters, InputFile, InputSource, datasets};
//!
//! let mut store = AreaStore::new();
//! let areas = datasets::areas_source();
//! let file = InputFile::new(format!("datasets/{}", areas.file));
//! store.populate(file.open()?, areas.parser, &areas.cols, &Filters::all())?;
//!
//! let popden = datasets::find("popden").unwrap();
//! let file = InputFile::new(format!("datasets/{}", popden.file));
//! store.populate_all(file.open()?, popden.parser, &popden.cols)?;
//!
//! println!("{}", store);
//! println!("{}", store.to_json_string()?);
//! # Ok::<(), bethyw_rs::Error>(())
//! ```

pub mod area;
pub mod areas;
pub mod datasets;
pub mod error;
pub mod filters;
pub mod input;
pub mod measure;
pub mod merge;
pub mod parsers;
pub mod series;

pub use area::Area;
pub use areas::AreaStore;
pub use datasets::{ColumnMapping, SourceColumn, SourceDataType};
pub use error::{Error, Result};
pub use filters::{Filters, StringFilter, YearFilter};
pub use input::{InputFile, InputSource};
pub use measure::Measure;
pub use series::ValueSeries;
