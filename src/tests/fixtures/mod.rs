pub mod assets;

pub mod commands {
    pub mod record_movement;
    pub mod register_asset;
}
