use anyhow::Result;

use crate::{
    emit::{quote_single, Emitter},
    matrix::{Matrix, OsFamily, PlatformEntry, Stage},
};

/// Build script shared by both families; invoked with the build type and
/// the stage identifier as positional arguments.
const BUILD_SCRIPT: &str = "travis/build.sh";

/// Linux jobs build inside a docker container; the tree has to be copied
/// back out before the CI snapshots the cache.
const CACHE_EXTRACT: &str = "docker cp storm:/storm/. .";

/// Emits the per-stage job sections that follow the `include:` header.
/// Each section opens with a stage banner, then lists every platform of
/// both families crossed with every build type, mac first.
pub fn emit_jobs(matrix: &Matrix) -> Result<String> {
    let em = Emitter::new();
    let mut out = String::new();

    for stage in &matrix.stages {
        em.blank(&mut out);
        em.banner(&mut out, 2, &format!("Stage: {}", stage.name));
        em.blank(&mut out);

        emit_family(&em, &mut out, matrix, stage, OsFamily::Mac);
        emit_family(&em, &mut out, matrix, stage, OsFamily::Linux);
    }

    Ok(out)
}

fn emit_family(em: &Emitter, out: &mut String, matrix: &Matrix, stage: &Stage, family: OsFamily) {
    for entry in matrix.entries(family) {
        em.comment(out, 2, &entry.os);
        for build in &matrix.build_types {
            emit_job(em, out, stage, entry, family, build);
        }
    }
}

fn emit_job(
    em: &Emitter,
    out: &mut String,
    stage: &Stage,
    entry: &PlatformEntry,
    family: OsFamily,
    build: &str,
) {
    let spec = entry.compiler_spec();

    let env_line = match family {
        OsFamily::Mac => format!("BUILD={} COMPILER={} STL=libc++", build, spec),
        OsFamily::Linux => format!("BUILD={} COMPILER={} LINUX={}", build, spec, entry.os),
    };

    // install/script run under `sh`, so values are re-exported quoted.
    let exports = match family {
        OsFamily::Mac => format!(
            "export OS=osx; export COMPILER={}; export STL={};",
            quote_single(&spec),
            quote_single("libc++")
        ),
        OsFamily::Linux => format!(
            "export OS=linux; export COMPILER={}; export LINUX={};",
            quote_single(&spec),
            quote_single(&entry.os)
        ),
    };

    em.item(out, 2, &format!("stage: {}", stage.name));
    em.key(out, 3, "os", family.tag());
    em.key(out, 3, "compiler", &entry.compiler);
    em.key(out, 3, "env", &env_line);
    em.key(out, 3, "install", &exports);
    em.line(out, 4, family.install_script());
    em.key(out, 3, "script", &exports);
    em.line(out, 4, &format!("{} {} {}", BUILD_SCRIPT, build, stage.id));

    if family == OsFamily::Linux {
        em.section(out, 3, "before_cache");
        em.line(out, 4, CACHE_EXTRACT);
    }
}
