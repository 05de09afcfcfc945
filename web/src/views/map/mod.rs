pub mod hospital_map;
pub mod results_list;
