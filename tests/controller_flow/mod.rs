mod coloring;
mod route;
mod view_and_options;
