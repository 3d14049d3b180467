/// Use cases orchestrating the domain services through the ports
mod generate_sbom;

pub use generate_sbom::GenerateSbomUseCase;
