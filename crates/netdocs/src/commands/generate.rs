//! `netdocs generate`: render, verify, write and optionally deploy.

use netdocs_config::load_network;
use netdocs_core::publish::SCREENSHOTS_DIR;
use netdocs_core::{Audience, Publisher, deploy};

use crate::cli::{GenerateArgs, GlobalOpts};
use crate::collaborators::{CommandDeployer, refresh_screenshots};
use crate::commands::util;
use crate::config::{audiences, resolve_settings};
use crate::error::CliError;
use crate::output;

pub fn handle(args: &GenerateArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let settings = resolve_settings(global, &args.source)?;
    let audiences = audiences(&args.audience);

    // Validate before any collaborator runs.
    let net = load_network(&settings.network)?;

    let mut warnings = Vec::new();
    if args.screenshots {
        let dest = settings.private_dir.join(SCREENSHOTS_DIR);
        if let Err(e) = refresh_screenshots(&settings.screenshots, &dest) {
            tracing::warn!(error = %e, "screenshot refresh failed");
            warnings.push(e.to_string());
        }
    }

    let publisher = Publisher::new(&net, chrono::Local::now().naive_local())?;
    let layout = settings.output_layout()?;
    let report = publisher.publish(&audiences, &layout)?;
    warnings.extend(report.warnings);

    tracing::info!(
        documents = report.written.len(),
        mirrored = report.mirrored,
        generated_at = publisher.generated_at(),
        "generation finished"
    );

    if args.deploy {
        let target = net.external();
        let prompt = format!(
            "Push {} and upload to {}?",
            layout.dir(Audience::Public).display(),
            target.website
        );
        if !layout.dir(Audience::Public).is_dir() {
            // A private-only run deploys the tree an earlier run left.
            warnings.push(format!(
                "deploy skipped: no public tree at {}",
                layout.dir(Audience::Public).display()
            ));
        } else if util::confirm(&prompt, global.yes)? {
            let deployer = CommandDeployer::new(&settings.deploy);
            warnings.extend(deploy(&deployer, &layout.public_tree(), target));
        } else {
            tracing::info!("deploy skipped");
        }
    }

    let rows = util::written_rows(&report.written);
    output::print_output(&output::render_table(&rows), global.quiet);
    output::print_warnings(&warnings, output::should_color(&global.color));
    Ok(())
}
