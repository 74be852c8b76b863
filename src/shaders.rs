// GLSL ES 3.00 sources. `uMouse` arrives in pixels with a bottom-left origin.

/// Shared by every effect. The quad is uploaded in `[0,1]` and stretched to
/// clip space here.
pub const QUAD_VERTEX: &str = r#"#version 300 es
in vec2 aPosition;
void main() {
    gl_Position = vec4(aPosition * 2.0 - 1.0, 0.0, 1.0);
}
"#;

pub const PORTAL_FRAGMENT: &str = r#"#version 300 es
precision mediump float;
uniform float uTime;
uniform vec2 uResolution;
uniform vec2 uMouse;
uniform float uIntensity;
uniform float uSpeed;
uniform float uZoom;
out vec4 fragColor;

vec3 permute(vec3 x) { return mod(((x * 34.0) + 1.0) * x, 289.0); }

float snoise(vec2 v) {
    const vec4 C = vec4(0.211324865405187, 0.366025403784439,
                        -0.577350269189626, 0.024390243902439);
    vec2 i = floor(v + dot(v, C.yy));
    vec2 x0 = v - i + dot(i, C.xx);
    vec2 i1 = (x0.x > x0.y) ? vec2(1.0, 0.0) : vec2(0.0, 1.0);
    vec4 x12 = x0.xyxy + C.xxzz;
    x12.xy -= i1;
    i = mod(i, 289.0);
    vec3 p = permute(permute(i.y + vec3(0.0, i1.y, 1.0)) + i.x + vec3(0.0, i1.x, 1.0));
    vec3 m = max(0.5 - vec3(dot(x0, x0), dot(x12.xy, x12.xy), dot(x12.zw, x12.zw)), 0.0);
    m = m * m;
    m = m * m;
    vec3 x = 2.0 * fract(p * C.www) - 1.0;
    vec3 h = abs(x) - 0.5;
    vec3 a0 = x - floor(x + 0.5);
    m *= 1.79284291400159 - 0.85373472095314 * (a0 * a0 + h * h);
    vec3 g;
    g.x = a0.x * x0.x + h.x * x0.y;
    g.yz = a0.yz * x12.xz + h.yz * x12.yw;
    return 130.0 * dot(m, g);
}

vec2 centered(vec2 px) {
    vec2 st = px / uResolution * 2.0 - 1.0;
    st.x *= uResolution.x / uResolution.y;
    return st;
}

void main() {
    vec2 st = centered(gl_FragCoord.xy) / (1.0 + uZoom);
    float ang = atan(st.y, st.x);
    float len = length(st);
    float t = uTime * (uSpeed + 0.5) * 0.5;

    float n1 = snoise(vec2(len * 5.0 - t * 2.0, ang * 2.0));
    float core = 0.15 / (len + 0.1 * n1);
    float beams = smoothstep(0.5, 0.8, snoise(vec2(ang * 8.0 + t, len * 2.0)));

    vec3 purple = vec3(0.1, 0.0, 0.4);
    vec3 gold = vec3(1.0, 0.8, 0.2);
    vec3 cyan = vec3(0.0, 0.5, 1.0);

    vec3 color = mix(purple, cyan, len + n1 * 0.2);
    color += gold * core * (uIntensity * 2.0);
    color += cyan * beams * 0.5;

    float d = distance(st, centered(uMouse));
    color += gold * max(0.5 - d, 0.0) * 2.0;

    fragColor = vec4(color, 1.0);
}
"#;

pub const WATER_FRAGMENT: &str = r#"#version 300 es
precision mediump float;
uniform float uTime;
uniform vec2 uResolution;
uniform vec2 uMouse;
uniform float uSpeed;
uniform float uBlue;
uniform float uComplexity;
out vec4 fragColor;

vec2 hash(vec2 p) {
    p = vec2(dot(p, vec2(127.1, 311.7)), dot(p, vec2(269.5, 183.3)));
    return -1.0 + 2.0 * fract(sin(p) * 43758.5453123);
}

float noise(vec2 p) {
    const float K1 = 0.366025404;
    const float K2 = 0.211324865;
    vec2 i = floor(p + (p.x + p.y) * K1);
    vec2 a = p - i + (i.x + i.y) * K2;
    vec2 o = step(a.yx, a.xy);
    vec2 b = a - o + K2;
    vec2 c = a - 1.0 + 2.0 * K2;
    vec3 h = max(0.5 - vec3(dot(a, a), dot(b, b), dot(c, c)), 0.0);
    vec3 n = h * h * h * h * vec3(dot(a, hash(i)), dot(b, hash(i + o)), dot(c, hash(i + 1.0)));
    return dot(n, vec3(70.0));
}

void main() {
    vec2 uv = gl_FragCoord.xy / uResolution;
    vec2 p = uv * 2.0 - 1.0;
    p.x *= uResolution.x / uResolution.y;

    float t = uTime * uSpeed * 0.5;
    vec2 w = p * (uComplexity + 2.0);

    vec2 q = vec2(noise(w), noise(w + vec2(1.0)));
    vec2 r = vec2(noise(w + q + vec2(1.7, 9.2) + 0.15 * t),
                  noise(w + q + vec2(8.3, 2.8) + 0.126 * t));
    float f = noise(w + r);

    vec3 deep = vec3(0.0, 0.3, 0.7) * uBlue;
    vec3 light = vec3(0.0, 0.8, 1.0) * uBlue;
    vec3 color = mix(deep, light, f);
    color = mix(color, vec3(1.0), smoothstep(0.8, 1.0, f));

    float d = distance(uv, uMouse / uResolution);
    color += vec3(sin(d * 50.0 - uTime * 10.0) * exp(-d * 5.0)) * 0.2;

    float spec = pow(max(0.0, dot(vec3(f, f, 1.0), vec3(0.0, 0.0, 1.0))), 10.0);
    color += spec * 0.5;

    fragColor = vec4(color, 1.0);
}
"#;

pub const TUNNEL_FRAGMENT: &str = r#"#version 300 es
precision mediump float;
uniform float uTime;
uniform vec2 uResolution;
uniform float uSpeed;
uniform float uLightIntensity;
uniform float uDepth;
out vec4 fragColor;

void main() {
    vec2 p = (gl_FragCoord.xy * 2.0 - uResolution) / min(uResolution.x, uResolution.y);
    float a = atan(p.y, p.x);
    float r = length(p);

    vec2 uv = vec2(1.0 / r + uTime * uSpeed * 0.2, a / 3.14159);
    float grid = sin(uv.x * 20.0 * uDepth) * sin(uv.y * 10.0);
    float w = fwidth(grid);
    grid = smoothstep(-w, w, grid);

    float pulse = sin(uTime + 10.0 / r) * 0.5 + 0.5;
    vec3 col = mix(vec3(0.1, 0.0, 0.3), vec3(0.0, 0.8, 1.0), grid * pulse);
    col *= r * 1.5;
    col *= uLightIntensity * 2.0;

    fragColor = vec4(col, 1.0);
}
"#;
