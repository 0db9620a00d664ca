//! `b2auth disposition <value>` – inspect a Content-Disposition value.

use anyhow::Result;
use b2auth_core::ContentDisposition;

pub fn run_disposition(raw: &str) -> Result<()> {
    let cd = ContentDisposition::parse(raw)?;
    println!("Canonical:      {cd}");
    println!("Type:           {}", cd.disposition_type());
    for p in cd.parameters() {
        println!("Parameter:      {} = {:?}", p.name, p.value);
    }
    if let Some(name) = cd.filename() {
        println!("Filename:       {name}");
    }
    if cd.has_parameter_continuations() {
        println!("Warning:        parameter continuations are not accepted by the service");
    }
    Ok(())
}
