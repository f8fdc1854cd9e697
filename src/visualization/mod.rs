pub mod ahosim_vis2d;
