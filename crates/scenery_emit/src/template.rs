//! Fixed page chrome
//!
//! The artifact wraps the generated script in a fixed HTML page: the
//! prefix declares the renderer engine, model loaders, post-processing
//! passes, and third-party utilities in the order the page expects; the
//! suffix is the static controls legend. Both are identical across all
//! scenes and live here so an include-list change happens in one place.

/// Everything before the generated `<script>` block
pub(crate) const PAGE_PREFIX: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8"/>
    </head>
    <body>
        <!-- three.js scripts -->
        <!-- startup three.js -->
        <script src="jsmodules/three.min.js"></script>
        <script src="jsmodules/three.module.js"></script>
        <script src="jsmodules/gif.js"></script>
        <!-- load models and look at them-->
        <script src="jsmodules/OBJLoader.js"></script>
        <script src="jsmodules/MTLLoader.js"></script>
        <!-- postprocessing -->
        <script src="jsmodules/CopyShader.js"></script>
        <script src="jsmodules/Pass.js"></script>
        <script src="jsmodules/ShaderPass.js"></script>
        <script src="jsmodules/MaskPass.js"></script>
        <script src="jsmodules/EffectComposer.js"></script>
        <script src="jsmodules/RenderPass.js"></script>
        <script src="jsmodules/DigitalGlitch.js"></script>
        <script src="jsmodules/GlitchPass.js"></script>

        <!--Other outside libraries -->
        <script type="text/javascript" src="jsmodules/jquery-3.5.1.min.js"></script>
        <script type="text/javascript" src="jsmodules/dat.gui.min.js"></script>
        <script type="text/javascript" src="jsmodules/gl-matrix-min.js"></script>

        <!-- Our code -->
        <script type="text/javascript" src="cameras3d.js"></script>
        <script type="text/javascript" src="scenecanvas.js"></script>


"#;

/// Everything after the generated `</script>` tag
pub(crate) const PAGE_SUFFIX: &str = r#"<table cellpadding>
    <tr>
        <td>
            <h3>Controls</h3>
            <ul>
                <li><b>Mouse</b>: Click and drag to look around</li>
                <li><b>W:</b> Forward</li>
                <li><b>S:</b> Backwards</li>
                <li><b>A:</b> Left</li>
                <li><b>D:</b> Right</li>
                <li><b>E:</b> Up</li>
                <li><b>C:</b> Down</li>
            </ul>
        </td>
    </tr>
</table>
    </body>
</html>"#;
