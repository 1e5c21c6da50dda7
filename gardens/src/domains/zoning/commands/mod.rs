mod activate_gardens;
mod create_zone;
mod filter_clipboard;
mod remove_cells;
mod remove_zone;
mod set_plant_allowed;
mod set_plant_to_grow;
mod toggle_cut;
mod toggle_sow;
