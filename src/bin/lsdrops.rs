use itertools::Itertools;
use parse_droplets::{condition::ConditionKey, discover};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "lsdrops", about = "List micrographs grouped by experimental condition")]
struct Opt {
    /// Directory holding the micrographs
    path: String,
    /// Image file extension
    #[structopt(short, long, default_value = ".bmp")]
    extension: String,
    /// Keep only the files whose name contains the term
    #[structopt(short, long, default_value = "")]
    filter: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let files = discover::image_files(&opt.path, &opt.extension, &opt.filter)?;
    let keyed = files
        .iter()
        .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
        .map(|name| ConditionKey::parse(name).map(|key| (key, name)))
        .collect::<Result<Vec<_>, _>>()?;
    for (key, names) in keyed
        .into_iter()
        .into_group_map()
        .into_iter()
        .sorted_by(|a, b| a.0.cmp(&b.0))
    {
        println!("{}: {}", key, names.join(" "));
    }

    Ok(())
}
