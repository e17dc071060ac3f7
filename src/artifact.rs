use std::path::Path;

use alloy::primitives::Bytes;
use serde::Deserialize;

use crate::error::StartupError;

/// Creation bytecode for a compiled contract, read from the artifact the
/// external toolchain produced. Both the flat hardhat shape
/// (`"bytecode": "0x.."`) and the nested forge shape
/// (`"bytecode": {"object": "0x.."}`) are accepted.
#[derive(Debug, Clone)]
pub struct Artifact {
	pub contract_name: Option<String>,
	pub bytecode: Bytes,
}

#[derive(Deserialize)]
struct RawArtifact {
	#[serde(default, rename = "contractName")]
	contract_name: Option<String>,
	bytecode: RawBytecode,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
	Hex(String),
	Object { object: String },
}

impl Artifact {
	/// Read and parse an artifact file.
	pub fn load(path: &Path) -> Result<Self, StartupError> {
		let json = std::fs::read_to_string(path).map_err(|source| StartupError::ArtifactRead {
			path: path.to_owned(),
			source,
		})?;
		Self::from_json(path, &json)
	}

	/// Parse artifact JSON. `path` is only used in error messages.
	pub fn from_json(path: &Path, json: &str) -> Result<Self, StartupError> {
		let raw: RawArtifact =
			serde_json::from_str(json).map_err(|source| StartupError::ArtifactParse {
				path: path.to_owned(),
				source,
			})?;

		let hex = match raw.bytecode {
			RawBytecode::Hex(hex) => hex,
			RawBytecode::Object { object } => object,
		};
		let bytecode: Bytes = hex.parse().map_err(|source| StartupError::BadBytecode {
			path: path.to_owned(),
			source,
		})?;

		if bytecode.is_empty() {
			return Err(StartupError::EmptyBytecode {
				path: path.to_owned(),
			});
		}

		Ok(Self {
			contract_name: raw.contract_name,
			bytecode,
		})
	}
}

/// Run the configured external build command and wait for it to finish. An
/// empty command disables the step.
pub async fn compile(command: &[String]) -> Result<(), StartupError> {
	let Some((program, args)) = command.split_first() else {
		return Ok(());
	};
	let rendered = command.join(" ");

	let status = tokio::process::Command::new(program)
		.args(args)
		.status()
		.await
		.map_err(|source| StartupError::CompileSpawn {
			command: rendered.clone(),
			source,
		})?;

	if !status.success() {
		return Err(StartupError::CompileFailed {
			command: rendered,
			status,
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn path() -> &'static Path {
		Path::new("Test.json")
	}

	#[test]
	fn parses_flat_bytecode_shape() {
		let a = Artifact::from_json(
			path(),
			r#"{"contractName": "ENSResolver", "abi": [], "bytecode": "0x6001600101"}"#,
		)
		.unwrap();
		assert_eq!(a.contract_name.as_deref(), Some("ENSResolver"));
		assert_eq!(a.bytecode.as_ref(), hex::decode("6001600101").unwrap());
	}

	#[test]
	fn parses_nested_bytecode_shape() {
		let a = Artifact::from_json(
			path(),
			r#"{"abi": [], "bytecode": {"object": "0x6001600101", "sourceMap": ""}}"#,
		)
		.unwrap();
		assert!(a.contract_name.is_none());
		assert_eq!(a.bytecode.len(), 5);
	}

	#[test]
	fn rejects_empty_bytecode() {
		let err = Artifact::from_json(path(), r#"{"bytecode": "0x"}"#).unwrap_err();
		assert!(matches!(err, StartupError::EmptyBytecode { .. }));
	}

	#[test]
	fn rejects_bad_hex() {
		let err = Artifact::from_json(path(), r#"{"bytecode": "0xzz"}"#).unwrap_err();
		assert!(matches!(err, StartupError::BadBytecode { .. }));
	}

	#[test]
	fn rejects_garbage_json() {
		let err = Artifact::from_json(path(), "not json").unwrap_err();
		assert!(matches!(err, StartupError::ArtifactParse { .. }));
	}

	#[tokio::test]
	async fn empty_compile_command_is_a_noop() {
		compile(&[]).await.unwrap();
	}

	#[tokio::test]
	async fn failing_compile_command_surfaces_status() {
		let err = compile(&["false".into()]).await.unwrap_err();
		assert!(matches!(err, StartupError::CompileFailed { .. }));
	}
}
