use ads1x15::Ads1x15;
use anyhow::Context;
use clap::Parser;
use rppal::hal::Delay;
use rppal::i2c::I2c;

use cli::{Commands, Pair};

mod cli;
mod util;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let bus = I2c::with_bus(cli.bus).with_context(|| format!("opening I2C bus {}", cli.bus))?;
    let mut adc = Ads1x15::new(bus, Delay::new(), cli.chip.into(), cli.address);
    adc.set_gain(cli.gain.into());

    match cli.command {
        Commands::Read { channel } => {
            let sample = adc.read_single_ended(channel)?;
            let millivolts = adc.millivolts(sample.into());
            println!("AIN{channel}: {sample} ({millivolts:.3} mV)");
        }
        Commands::Diff { pair } => {
            let sample = match pair {
                Pair::Ain0Ain1 => adc.read_differential_0_1()?,
                Pair::Ain2Ain3 => adc.read_differential_2_3()?,
            };
            println!("{pair}: {sample} ({:.3} mV)", adc.millivolts(sample.into()));
        }
        Commands::Comparator { channel, threshold } => {
            let range = adc.chip().sample_range();
            anyhow::ensure!(
                range.contains(&threshold),
                "threshold {threshold} is outside {}..={} for this chip",
                range.start(),
                range.end()
            );
            adc.start_comparator_single_ended(channel, threshold)?;
            println!(
                "Comparator armed on AIN{channel} above {threshold} ({:.3} mV)",
                adc.millivolts(threshold.into())
            );
        }
        Commands::Last => {
            let sample = adc.get_last_conversion_results()?;
            println!("Last conversion: {sample} ({:.3} mV)", adc.millivolts(sample.into()));
        }
    }
    Ok(())
}
