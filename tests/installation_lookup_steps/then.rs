//! Then steps for installation lookup BDD scenarios.

use super::world::LookupWorld;
use rstest_bdd_macros::then;

#[then(r#"the resolved installation is "{name}""#)]
fn resolved_installation_is(world: &LookupWorld, name: String) -> Result<(), eyre::Report> {
    let resolved = world.resolved()?;
    if resolved.name() != Some(name.as_str()) {
        return Err(eyre::eyre!(
            "expected installation '{name}', got {:?}",
            resolved.name()
        ));
    }
    Ok(())
}

#[then(r#"the resolved server link is "{link}""#)]
fn resolved_server_link_is(world: &LookupWorld, link: String) -> Result<(), eyre::Report> {
    let actual = world.resolved()?.server_link();
    if actual != link {
        return Err(eyre::eyre!("expected server link '{link}', got '{actual}'"));
    }
    Ok(())
}

#[then(r#"the resolved project link for branch "{branch}" is "{link}""#)]
fn resolved_project_link_is(
    world: &LookupWorld,
    branch: String,
    link: String,
) -> Result<(), eyre::Report> {
    let actual = world.resolved()?.project_link("g", "a", Some(branch.as_str()));
    if actual != link {
        return Err(eyre::eyre!("expected project link '{link}', got '{actual}'"));
    }
    Ok(())
}

#[then("no installation is resolved")]
fn no_installation_is_resolved(world: &LookupWorld) -> Result<(), eyre::Report> {
    match world.last_resolved.as_ref() {
        Some(None) => Ok(()),
        Some(Some(found)) => Err(eyre::eyre!(
            "expected no installation, got {:?}",
            found.name()
        )),
        None => Err(eyre::eyre!("no lookup has run in this scenario")),
    }
}

#[then("{count:usize} installations are listed")]
fn installations_are_listed(world: &LookupWorld, count: usize) -> Result<(), eyre::Report> {
    let listed = world
        .last_listed
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no listing has run in this scenario"))?;
    if listed.len() != count {
        return Err(eyre::eyre!(
            "expected {count} installations, found {}",
            listed.len()
        ));
    }
    Ok(())
}
