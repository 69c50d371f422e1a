use anyhow::{Context, Result, bail};
use bethyw_rs::datasets::{self, InputFileSource};
use bethyw_rs::filters::validate_year;
use bethyw_rs::{AreaStore, Filters, InputFile, InputSource, StringFilter, YearFilter};
use clap::Parser;
use log::{debug, info};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "bethyw",
    version,
    about = "Import, merge & summarize Welsh Government statistics datasets"
)]
struct Cli {
    /// Directory holding the input data files.
    #[arg(long, default_value = "datasets")]
    dir: PathBuf,
    /// Dataset codes separated by comma or semicolon (omit or 'all' for every dataset)
    #[arg(short, long)]
    datasets: Option<String>,
    /// Authority codes separated by comma or semicolon (omit or 'all' for every area)
    #[arg(short, long)]
    areas: Option<String>,
    /// Measure codenames separated by comma or semicolon (omit or 'all' for every measure)
    #[arg(short, long)]
    measures: Option<String>,
    /// Year (YYYY) or inclusive range (YYYY-ZZZZ); 0 for all years
    #[arg(short, long, default_value = "0")]
    years: String,
    /// Print the output as JSON instead of tables.
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn is_all(list: &[String]) -> bool {
    list.iter().any(|x| x.eq_ignore_ascii_case("all"))
}

fn parse_filter(arg: Option<&str>) -> StringFilter {
    match arg.map(parse_list) {
        Some(list) if !is_all(&list) => StringFilter::from_values(list),
        _ => StringFilter::Unfiltered,
    }
}

fn parse_years(s: &str) -> Result<YearFilter> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(YearFilter::Unfiltered);
    }
    let (start, end) = match s.split_once('-') {
        Some((a, b)) => (validate_year(a.trim())?, validate_year(b.trim())?),
        None => {
            let y = validate_year(s)?;
            (y, y)
        }
    };
    let years = YearFilter::from_bounds(start, end);
    if let YearFilter::Range { start, end } = years {
        if start > end {
            bail!("invalid --years, {start} is after {end}");
        }
    }
    Ok(years)
}

fn select_datasets(arg: Option<&str>) -> Result<Vec<InputFileSource>> {
    let list = match arg.map(parse_list) {
        Some(list) if !list.is_empty() && !is_all(&list) => list,
        _ => return Ok(datasets::catalogue()),
    };
    list.iter()
        .map(|code| {
            datasets::find(code).ok_or_else(|| anyhow::anyhow!("no dataset matches key: {code}"))
        })
        .collect()
}

fn load(store: &mut AreaStore, dir: &Path, source: &InputFileSource, filters: &Filters) -> Result<()> {
    let file = InputFile::new(dir.join(source.file));
    let reader = file.open()?;
    store
        .populate(reader, source.parser, &source.cols, filters)
        .with_context(|| format!("error importing dataset {} ({})", source.code, file.source()))?;
    info!("imported {} from {}, {} areas", source.code, file.source(), store.len());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let datasets = select_datasets(cli.datasets.as_deref())?;
    let filters = Filters {
        areas: parse_filter(cli.areas.as_deref()),
        measures: parse_filter(cli.measures.as_deref()),
        years: parse_years(&cli.years).context("invalid --years, expected YYYY or YYYY-ZZZZ")?,
    };
    debug!("selected {} datasets with {:?}", datasets.len(), filters);

    let mut store = AreaStore::new();
    let names_only = Filters {
        areas: filters.areas.clone(),
        ..Filters::all()
    };
    load(&mut store, &cli.dir, &datasets::areas_source(), &names_only)?;
    for source in &datasets {
        load(&mut store, &cli.dir, source, &filters)?;
    }

    if cli.json {
        println!("{}", store.to_json_string()?);
    } else {
        println!("{}", store);
    }
    Ok(())
}
