use crate::domain::distribution::Distribution;

pub fn parse_arch_release(_contents: &str) -> Distribution {
    Distribution::builder()
        .id("arch")
        .name("Arch Linux")
        .pretty_name("Arch Linux")
        .build_id("rolling")
        .build()
}
