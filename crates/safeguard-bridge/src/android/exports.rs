// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JNI entry points called by the host activity.
//
// The activity owns the `sendSms` method channel and forwards every call:
//
// ```kotlin
// MethodChannel(messenger, "sendSms").setMethodCallHandler { call, result ->
//     val reply = nativeHandleMethodCall(call.method, JSONObject(call.arguments as Map<*, *>? ?: emptyMap<String, Any>()).toString())
//     // decode `reply` and call result.success / result.error / result.notImplemented
// }
// ```

use std::sync::OnceLock;

use jni::JNIEnv;
use jni::objects::{GlobalRef, JObject, JString};
use jni::sys::jstring;

use safeguard_core::BridgeConfig;
use safeguard_core::error::{Result, SafeguardError};

use super::AndroidTelephony;
use crate::{CHANNEL, SmsBridge, channel, logging};

/// Application context handed to `ndk_context`. Held for the process lifetime.
static HOST_CONTEXT: OnceLock<GlobalRef> = OnceLock::new();

/// Config supplied through `nativeInit`; defaults apply if it was never called.
static CONFIG: OnceLock<BridgeConfig> = OnceLock::new();

/// Register the JavaVM and application context with `ndk_context` once.
fn register_host(env: &mut JNIEnv<'_>, activity: &JObject<'_>) -> Result<()> {
    if HOST_CONTEXT.get().is_some() {
        return Ok(());
    }

    let vm = env
        .get_java_vm()
        .map_err(|e| SafeguardError::Bridge(format!("get_java_vm: {e}")))?;
    let app_context = env
        .call_method(activity, "getApplicationContext", "()Landroid/content/Context;", &[])
        .and_then(|v| v.l())
        .map_err(|e| SafeguardError::Bridge(format!("getApplicationContext: {e}")))?;
    let global = env
        .new_global_ref(&app_context)
        .map_err(|e| SafeguardError::Bridge(format!("new_global_ref: {e}")))?;

    let context_ptr = global.as_obj().as_raw();
    if HOST_CONTEXT.set(global).is_ok() {
        // SAFETY: both pointers come from a live JNIEnv and the context is a
        // global reference kept alive by `HOST_CONTEXT`.
        unsafe {
            ndk_context::initialize_android_context(
                vm.get_java_vm_pointer().cast(),
                context_ptr.cast(),
            );
        }
    }
    Ok(())
}

fn read_string(env: &mut JNIEnv<'_>, value: &JString<'_>, what: &str) -> Result<Option<String>> {
    if value.is_null() {
        return Ok(None);
    }
    env.get_string(value)
        .map(|s| Some(String::from(s)))
        .map_err(|e| SafeguardError::Bridge(format!("get_string({what}): {e}")))
}

/// `external fun nativeInit(configJson: String?)`
///
/// Installs logging and stores the bridge config. A null or malformed
/// config falls back to the defaults.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_example_android_MainActivity_nativeInit<'local>(
    mut env: JNIEnv<'local>,
    activity: JObject<'local>,
    config_json: JString<'local>,
) {
    let raw = read_string(&mut env, &config_json, "configJson");
    let (config, rejected) = match raw.and_then(|raw| raw.map(|r| BridgeConfig::from_json(&r)).transpose()) {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(e) => (BridgeConfig::default(), Some(e)),
    };

    logging::init(&config);
    if let Some(e) = rejected {
        tracing::warn!(error = %e, "Android: ignoring bridge config");
    }
    let config = CONFIG.get_or_init(|| config);

    if let Err(e) = register_host(&mut env, &activity) {
        tracing::error!(error = %e, "Android: failed to register host context");
        return;
    }
    tracing::info!(channel = CHANNEL, message_body = config.log_message_body, "Android: SMS bridge ready");
}

/// `external fun nativeHandleMethodCall(method: String, argumentsJson: String?): String?`
///
/// Returns the JSON outcome (`{"status": ...}`), or null if the call could
/// not be processed at all.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_example_android_MainActivity_nativeHandleMethodCall<'local>(
    mut env: JNIEnv<'local>,
    activity: JObject<'local>,
    method: JString<'local>,
    arguments_json: JString<'local>,
) -> jstring {
    match handle_method_call(&mut env, &activity, &method, &arguments_json) {
        Ok(reply) => match env.new_string(reply) {
            Ok(s) => s.into_raw(),
            Err(e) => {
                tracing::error!(error = %e, "Android: failed to allocate reply string");
                std::ptr::null_mut()
            }
        },
        Err(e) => {
            tracing::error!(error = %e, "Android: method call dropped");
            std::ptr::null_mut()
        }
    }
}

fn handle_method_call(
    env: &mut JNIEnv<'_>,
    activity: &JObject<'_>,
    method: &JString<'_>,
    arguments_json: &JString<'_>,
) -> Result<String> {
    register_host(env, activity)?;

    let method = read_string(env, method, "method")?.unwrap_or_default();
    let arguments = read_string(env, arguments_json, "argumentsJson")?.unwrap_or_default();

    let config = CONFIG.get().cloned().unwrap_or_default();
    let bridge = SmsBridge::with_config(AndroidTelephony::new(), config);
    channel::dispatch(&bridge, &method, &arguments)
}
