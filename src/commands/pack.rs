use std::io;

use anyhow::{bail, Context};
use growpack::{Packer, Rect};

use super::read_job;
use crate::{
    data::{BinSize, JobConfig, Layout},
    options::PackOptions,
    part::Part,
    plate::BuildPlate,
};

pub fn pack(options: PackOptions) -> anyhow::Result<()> {
    let mut config = read_job(&options.job)?;
    apply_overrides(&mut config, &options);

    let layout = arrange_job(&config)?;
    check_fit(&layout, options.strict)?;

    match &options.output {
        Some(path) => layout
            .write_to_file(path)
            .with_context(|| format!("couldn't write layout to {}", path.display()))?,
        None => {
            let stdout = io::stdout();
            layout.write(stdout.lock())?;
        }
    }

    Ok(())
}

/// Command line values win over the ones from the job file.
fn apply_overrides(config: &mut JobConfig, options: &PackOptions) {
    if let Some(spacing) = options.spacing {
        config.arrange.spacing = spacing;
    }

    if let (Some(x), Some(y)) = (options.offset_x, options.offset_y) {
        config.arrange.offset = Some((x, y));
    }
}

fn check_fit(layout: &Layout, strict: bool) -> anyhow::Result<()> {
    if layout.fits_plate {
        return Ok(());
    }

    if strict {
        bail!(
            "a {} x {} layout does not fit on the build plate of {}",
            layout.bin.width,
            layout.bin.length,
            layout.printer
        );
    }

    log::warn!(
        "A {} x {} layout does not fit on the build plate of {}",
        layout.bin.width,
        layout.bin.length,
        layout.printer
    );

    Ok(())
}

/// Packs the objects of a job and moves the packed area onto the build plate.
pub(crate) fn arrange_job(config: &JobConfig) -> anyhow::Result<Layout> {
    let parts: Vec<Part> = config.objects.iter().map(Part::from).collect();
    log::info!(
        "Arranging {} objects for {}",
        parts.len(),
        config.printer.name
    );

    let mut packer = Packer::new(parts)
        .spacing(config.arrange.spacing)
        .min_seed(config.arrange.min_seed);

    let (width, length) = packer.pack().context("couldn't pack objects")?;

    let plate = BuildPlate::from(&config.printer.build_plate);
    let offset = config
        .arrange
        .offset
        .unwrap_or_else(|| plate.centered_offset((width, length)));

    log::debug!(
        "Placing {} x {} packed area at ({}, {})",
        width,
        length,
        offset.0,
        offset.1
    );
    packer.arrange(offset.0, offset.1);

    let fits_plate = plate.contains(&Rect::new(offset, (width, length)));

    Ok(Layout {
        printer: config.printer.name.clone(),
        bin: BinSize { width, length },
        offset,
        fits_plate,
        objects: packer.objects().iter().map(Part::placed).collect(),
    })
}
