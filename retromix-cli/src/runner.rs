//! Drives the audio facade from parsed CLI arguments.

use std::{fs, thread, time::Duration};

use clap::ArgMatches;
use log::info;
use retromix_lib::{AudioError, AudioSystem, DeviceSettings, LoadPath, MAX_VOLUME};

pub fn run(args: &ArgMatches) -> Result<i32, AudioError> {
    let assets = args.get_one::<String>("ASSETS").unwrap();
    let samples: Vec<String> = args
        .get_many::<String>("sample")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let music = args.get_one::<String>("music");
    let volume = args
        .get_one::<String>("volume")
        .unwrap()
        .parse::<i32>()
        .unwrap_or(MAX_VOLUME);
    let duration = args
        .get_one::<String>("duration")
        .unwrap()
        .parse::<f64>()
        .unwrap_or(2.0);

    let settings = match args.get_one::<String>("settings-json") {
        Some(path) => {
            let payload = fs::read_to_string(path)?;
            serde_json::from_str(&payload)
                .map_err(|err| AudioError::Unsupported(format!("invalid settings json: {}", err)))?
        }
        None => DeviceSettings::default(),
    };

    let load_path = LoadPath::new(assets);
    let mut system = if args.get_flag("detached") {
        AudioSystem::detached_with_settings(load_path, settings)
    } else {
        AudioSystem::with_settings(load_path, settings)
    };

    system.init_device()?;
    system.load_samples(&samples)?;
    println!("loaded {} sample(s)", system.loaded_sample_count());

    if let Some(music) = music {
        system.load_music(music)?;
        system.set_music_volume(volume);
        system.play_music();
        println!("looping {} at volume {}", music, system.music_volume());
    }

    for slot in 0..system.loaded_sample_count() {
        system.play_sample(slot);
    }

    thread::sleep(Duration::from_secs_f64(duration.max(0.0)));
    system.shutdown();
    info!("mix finished");

    Ok(0)
}
