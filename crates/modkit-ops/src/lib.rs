pub mod ops_check;
pub mod ops_list;
pub mod ops_setup;
pub mod ops_tree;
