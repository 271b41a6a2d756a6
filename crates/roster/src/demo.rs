use std::io::Write;
use std::path::PathBuf;

use fastrace::trace;
use roster_output::*;
use roster_service::{ServiceError, UserService};
use roster_store::Repository;
use tracing::debug;

use crate::shapes::{draw_shapes, Circle, Drawable, Rectangle};

const RANGE_MIN_AGE: u32 = 25;
const RANGE_MAX_AGE: u32 = 40;

#[derive(Debug, Clone, Default)]
pub struct DemoOptions {
    pub json: bool,
    pub export: Option<PathBuf>,
}

/// Creates three users, ages one of them, lists a range, draws shapes and
/// optionally exports. Stops at the first error.
#[trace]
pub fn run_demo<R: Repository, W: Write>(
    service: &mut UserService<R>,
    options: &DemoOptions,
    out: &mut W,
) -> Result<(), ServiceError> {
    service.create_user("John Doe", "john@example.com", Some(30))?;
    service.create_user("Jane Smith", "jane@example.com", Some(25))?;
    let bob = service.create_user("Bob Johnson", "bob@example.com", None)?;

    let users = service.list_users();
    if options.json {
        writeln!(out, "{}", format_users_json(&users)?)?;
    } else {
        writeln!(out, "{}", format_user_list("Created users", &users))?;
    }

    if let Some(updated) = service.update_user_age(bob.id, 35)? {
        writeln!(out, "{}", format_age_update(&updated))?;
    }

    let in_range = service.get_users_by_age_range(RANGE_MIN_AGE, RANGE_MAX_AGE);
    if options.json {
        writeln!(out, "{}", format_users_json(&in_range)?)?;
    } else {
        writeln!(
            out,
            "{}",
            format_age_range("Adults", RANGE_MIN_AGE, RANGE_MAX_AGE, &in_range)
        )?;
    }

    let shapes: Vec<Box<dyn Drawable>> = vec![
        Box::new(Circle { radius: 5.0 }),
        Box::new(Rectangle {
            width: 10.0,
            height: 20.0,
        }),
        Box::new(Circle { radius: 3.0 }),
    ];
    writeln!(out, "{}", format_shapes(&draw_shapes(&shapes)))?;

    if let Some(path) = &options.export {
        service.export_users_to_json(path)?;
        writeln!(out, "Exported users to {}", path.display())?;
    } else {
        debug!("Export skipped");
    }

    Ok(())
}

/// Prints validation errors and swallows them; anything else is returned.
pub fn report_outcome<W: Write>(
    result: Result<(), ServiceError>,
    out: &mut W,
) -> anyhow::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_validation() => {
            writeln!(out, "{}", format_error(&e))?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
