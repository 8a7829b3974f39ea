//! RON persistence for ranges and any other `serde` value.
//!
//! A range is stored as its two named boundary fields, e.g. `(min: 12, max: 168)`.

use super::*;

pub fn read_from_file<P, T>(path: P) -> Result<T>
where
    P: AsRef<Path>,
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let value = from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!("Read from {}", path.display());
    Ok(value)
}

pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: std::io::Read,
    T: DeserializeOwned,
{
    Ok(ron::de::from_reader(reader)?)
}

pub fn from_str<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(ron::from_str(text)?)
}

pub fn write_to_file<P, T>(path: P, value: &T) -> Result<()>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    to_writer(BufWriter::new(file), value)?;
    info!("Wrote to {}", path.display());
    Ok(())
}

pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: std::io::Write,
    T: Serialize,
{
    let ron_config = ron::ser::PrettyConfig::default();
    ron::ser::to_writer_pretty(writer, &value, ron_config)?;
    Ok(())
}

//
// Tests
//
