use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unrecognized temperature scale '{label}': try \"T90\", \"T68\" or \"T48\"")]
    UnknownTemperatureScale { label: String },

    #[error("Salinity must be non-negative, got {salinity} PSU")]
    NegativeSalinity { salinity: f64 },

    #[error(
        "Density is undefined at S={salinity} PSU, T={temperature} °C, P={pressure_dbar} dbar (bulk modulus cancels the pressure term)"
    )]
    DensityUndefined {
        salinity: f64,
        temperature: f64,
        pressure_dbar: f64,
    },

    #[error("Missing salinity: provide 'salinity' or 'conductivity' in the inputs")]
    MissingSalinityInput,

    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --inputs-json: {source}")]
    ParseInputsJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --assumptions-json: {source}")]
    ParseAssumptionsJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in input document: {source}")]
    ParseCmdInputJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Missing input data: provide --input or --inputs-json")]
    MissingInputData,
}
