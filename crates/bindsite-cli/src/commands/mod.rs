pub mod centroid;
