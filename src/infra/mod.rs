mod component_factory_impl;
mod host_file_reader;
pub mod parsers;
mod process_command_runner;

pub use component_factory_impl::ConcreteComponentFactory;
pub use host_file_reader::HostFileReader;
pub use process_command_runner::ProcessCommandRunner;
