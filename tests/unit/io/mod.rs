mod cli;
mod image;
mod tileset;
